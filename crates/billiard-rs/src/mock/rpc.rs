use crate::error::ClientError;
use crate::rpc::RpcClient;
use async_trait::async_trait;
use std::default::Default;
use std::sync::{Mutex, RwLock};
use stellar_rpc_client::{GetTransactionResponse, SimulateTransactionResponse};
use stellar_xdr::curr::{AccountEntry, TransactionEnvelope};

use super::{mock_account_entry, mock_transaction_response};

/// RPC client answering from canned results.
///
/// `None` results fall back to a fresh account at sequence 0, an empty
/// simulation and a successful transaction without return value. Every
/// simulated and submitted envelope is recorded.
pub struct MockRpcClient {
    get_account_result: RwLock<Option<Result<AccountEntry, ClientError>>>,
    simulate_transaction_envelope_result:
        RwLock<Option<Result<SimulateTransactionResponse, ClientError>>>,
    send_transaction_polling_result: RwLock<Option<Result<GetTransactionResponse, ClientError>>>,
    simulated: Mutex<Vec<TransactionEnvelope>>,
    sent: Mutex<Vec<TransactionEnvelope>>,
}

impl MockRpcClient {
    pub fn new(
        get_account_result: Option<Result<AccountEntry, ClientError>>,
        simulate_transaction_envelope_result: Option<
            Result<SimulateTransactionResponse, ClientError>,
        >,
        send_transaction_polling_result: Option<Result<GetTransactionResponse, ClientError>>,
    ) -> Self {
        Self {
            get_account_result: RwLock::new(get_account_result),
            simulate_transaction_envelope_result: RwLock::new(
                simulate_transaction_envelope_result,
            ),
            send_transaction_polling_result: RwLock::new(send_transaction_polling_result),
            simulated: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Number of simulation requests received so far.
    pub fn simulate_calls(&self) -> usize {
        self.simulated.lock().unwrap().len()
    }

    /// Envelopes passed to `send_transaction_polling`, in order.
    pub fn sent_envelopes(&self) -> Vec<TransactionEnvelope> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl RpcClient for MockRpcClient {
    async fn get_account(&self, account_id: &str) -> Result<AccountEntry, ClientError> {
        let result = self.get_account_result.read().unwrap();
        match result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(mock_account_entry(account_id)),
        }
    }

    async fn simulate_transaction_envelope(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<SimulateTransactionResponse, ClientError> {
        self.simulated.lock().unwrap().push(tx_envelope.clone());
        let result = self.simulate_transaction_envelope_result.read().unwrap();
        match result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(SimulateTransactionResponse::default()),
        }
    }

    async fn send_transaction_polling(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<GetTransactionResponse, ClientError> {
        self.sent.lock().unwrap().push(tx_envelope.clone());
        let result = self.send_transaction_polling_result.read().unwrap();
        match result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(mock_transaction_response()),
        }
    }
}
