use crate::error::ClientError;
use stellar_rpc_client::GetTransactionResponse;
use stellar_xdr::curr::{ScVal, TransactionMeta, TransactionResult, TransactionResultResult};

/// Extracts the value returned by a contract function from a polled
/// transaction response.
///
/// A response without a successful transaction result is an error. A
/// successful transaction whose metadata carries no Soroban return value
/// yields `None`.
pub fn parse_invoke_result(
    response: &GetTransactionResponse,
) -> Result<Option<ScVal>, ClientError> {
    check_tx_success(&response.result)?;

    Ok(response.result_meta.as_ref().and_then(extract_return_value))
}

fn check_tx_success(tx_result: &Option<TransactionResult>) -> Result<(), ClientError> {
    let tx_result = tx_result.as_ref().ok_or_else(|| {
        ClientError::TransactionFailed("No transaction result available".to_string())
    })?;

    match &tx_result.result {
        TransactionResultResult::TxSuccess(_) => Ok(()),
        _ => Err(ClientError::TransactionFailed(format!(
            "Transaction failed: {:?}",
            tx_result.result
        ))),
    }
}

fn extract_return_value(meta: &TransactionMeta) -> Option<ScVal> {
    match meta {
        TransactionMeta::V3(v3) => v3.soroban_meta.as_ref().map(|sm| sm.return_value.clone()),
        _ => None,
    }
}
