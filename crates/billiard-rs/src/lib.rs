mod contract;
mod crypto;
mod env;
mod error;
mod friendbot;
pub mod mock;
mod operation;
mod parser;
mod response;
mod rpc;
mod scval;
mod signer;
mod transaction;
mod units;

pub use contract::{ContractHandle, parse_contract_id};
pub use env::{Env, EnvConfigs};
pub use error::ClientError;
pub use friendbot::Friendbot;
pub use operation::Operations;
pub use parser::parse_invoke_result;
pub use response::CallResponse;
pub use rpc::{ExternalRpcClient, RpcClient};
pub use signer::Signer;
pub use transaction::TransactionBuilder;
pub use units::{parse_units, parse_units_u128};

pub use stellar_rpc_client::GetTransactionResponse;

// re-exports
pub use stellar_xdr::curr as xdr;

// traits
pub use scval::IntoScVal;
