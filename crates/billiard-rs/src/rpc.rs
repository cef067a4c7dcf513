//! # RPC Client
//!
//! This module provides the RPC client used to reach the network's RPC server.
//! It defines a trait for the handful of RPC operations a contract call needs
//! and a concrete implementation backed by the official Stellar RPC client.
//!
use crate::error::ClientError;
use stellar_rpc_client::{Client, Error as RpcError};
use stellar_rpc_client::{GetTransactionResponse, SimulateTransactionResponse};
use stellar_xdr::curr::{AccountEntry, TransactionEnvelope};

/// Interface for RPC operations.
///
/// This trait defines the operations a contract invocation goes through:
/// loading the source account, simulating the transaction and submitting it.
/// It is the seam where tests plug in [`crate::mock::MockRpcClient`].
#[async_trait::async_trait]
pub trait RpcClient: Send + Sync {
    async fn get_account(&self, account_id: &str) -> Result<AccountEntry, ClientError>;
    async fn simulate_transaction_envelope(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<SimulateTransactionResponse, ClientError>;
    async fn send_transaction_polling(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<GetTransactionResponse, ClientError>;
}

/// Implementation of the RPC client using the official Stellar RPC client.
pub struct ExternalRpcClient {
    /// The internal Stellar RPC client
    client: Client,
}

impl ExternalRpcClient {
    /// Creates a new external RPC client connected to the specified URL.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NetworkRequestFailed` if the URL cannot be used
    /// to build a client.
    pub fn new(url: &str) -> Result<Self, ClientError> {
        let client = Client::new(url).map_err(|e| {
            ClientError::NetworkRequestFailed(format!("Failed to create client: {}", e))
        })?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl RpcClient for ExternalRpcClient {
    async fn get_account(&self, account_id: &str) -> Result<AccountEntry, ClientError> {
        self.client
            .get_account(account_id)
            .await
            .map_err(map_rpc_error)
    }

    async fn simulate_transaction_envelope(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<SimulateTransactionResponse, ClientError> {
        self.client
            .simulate_transaction_envelope(tx_envelope)
            .await
            .map_err(map_rpc_error)
    }

    /// Submits a transaction to the network and polls until completion.
    async fn send_transaction_polling(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<GetTransactionResponse, ClientError> {
        self.client
            .send_transaction_polling(tx_envelope)
            .await
            .map_err(map_rpc_error)
    }
}

/// Keeps the network's verdict on a transaction apart from transport
/// failures.
fn map_rpc_error(err: RpcError) -> ClientError {
    match err {
        RpcError::TransactionFailed(msg) | RpcError::TransactionSubmissionFailed(msg) => {
            ClientError::TransactionFailed(msg)
        }
        RpcError::TransactionSimulationFailed(msg) => {
            ClientError::TransactionSimulationFailed(msg)
        }
        other => ClientError::NetworkRequestFailed(other.to_string()),
    }
}
