use stellar_rpc_client::{GetTransactionResponse, SimulateTransactionResponse};
use stellar_xdr::curr::{
    AccountId, ExtensionPoint, Memo, Preconditions, ScVal, SequenceNumber,
    SorobanTransactionMeta, SorobanTransactionMetaExt, Transaction, TransactionEnvelope,
    TransactionExt, TransactionMeta, TransactionMetaV3, TransactionResult, TransactionResultExt,
    TransactionResultResult, TransactionV1Envelope, VecM,
};

/// Creates a basic transaction for mocking purposes
pub fn mock_transaction(account_id: AccountId) -> Transaction {
    Transaction {
        fee: 100,
        seq_num: SequenceNumber::from(1),
        source_account: account_id.into(),
        cond: Preconditions::None,
        memo: Memo::None,
        operations: VecM::default(),
        ext: TransactionExt::V0,
    }
}

/// Creates a basic unsigned transaction envelope for testing
pub fn mock_transaction_envelope(account_id: AccountId) -> TransactionEnvelope {
    TransactionEnvelope::Tx(TransactionV1Envelope {
        tx: mock_transaction(account_id),
        signatures: Default::default(),
    })
}

/// Creates a mock SimulateTransactionResponse with a specified resource fee
pub fn mock_simulate_tx_response(min_resource_fee: Option<u64>) -> SimulateTransactionResponse {
    SimulateTransactionResponse {
        min_resource_fee: min_resource_fee.unwrap_or(100),
        transaction_data: "test".to_string(),
        ..Default::default()
    }
}

fn success_result() -> TransactionResult {
    TransactionResult {
        fee_charged: 100,
        result: TransactionResultResult::TxSuccess(VecM::default()),
        ext: TransactionResultExt::V0,
    }
}

/// Creates a basic transaction response that indicates success
pub fn mock_transaction_response() -> GetTransactionResponse {
    GetTransactionResponse {
        envelope: None,
        result: Some(success_result()),
        result_meta: None,
        status: "SUCCESS".to_string(),
    }
}

/// Creates a successful transaction response with return value
pub fn mock_transaction_response_with_return_value(return_val: ScVal) -> GetTransactionResponse {
    let meta = TransactionMeta::V3(TransactionMetaV3 {
        ext: ExtensionPoint::V0,
        soroban_meta: Some(SorobanTransactionMeta {
            ext: SorobanTransactionMetaExt::V0,
            events: Default::default(),
            return_value: return_val,
            diagnostic_events: Default::default(),
        }),
        tx_changes_before: Default::default(),
        tx_changes_after: Default::default(),
        operations: Default::default(),
    });

    GetTransactionResponse {
        status: "SUCCESS".to_string(),
        envelope: None,
        result: Some(success_result()),
        result_meta: Some(meta),
    }
}
