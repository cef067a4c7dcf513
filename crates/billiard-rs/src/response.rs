use stellar_rpc_client::GetTransactionResponse;
use stellar_xdr::curr::ScVal;

use crate::{ClientError, parser};

/// Outcome of a contract function call.
#[derive(Debug, Clone)]
pub struct CallResponse {
    /// Hex encoded hash of the submitted transaction
    pub transaction_id: String,
    /// Value returned by the contract function, `ScVal::Void` when none was reported
    pub value: ScVal,
    /// The underlying RPC transaction response
    pub response: GetTransactionResponse,
}

impl CallResponse {
    /// Parses a polled transaction response into a call outcome.
    ///
    /// Fails when the transaction did not succeed.
    pub fn from_response(
        transaction_id: String,
        response: GetTransactionResponse,
    ) -> Result<Self, ClientError> {
        let value = parser::parse_invoke_result(&response)?.unwrap_or(ScVal::Void);
        Ok(Self {
            transaction_id,
            value,
            response,
        })
    }

}
