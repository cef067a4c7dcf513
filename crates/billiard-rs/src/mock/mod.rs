//! Test doubles for code built on this crate: an RPC client answering from
//! canned results, environments wired to it and fixed signers.
mod env;
mod rpc;
mod transaction;

pub use env::{mock_account_entry, mock_env, mock_env_with_client, mock_signer1, mock_signer2};
pub use rpc::MockRpcClient;
pub use transaction::{
    mock_simulate_tx_response, mock_transaction, mock_transaction_envelope,
    mock_transaction_response, mock_transaction_response_with_return_value,
};
