use crate::{
    crypto,
    error::ClientError,
    rpc::{ExternalRpcClient, RpcClient},
};
use std::sync::Arc;
use stellar_rpc_client::{GetTransactionResponse, SimulateTransactionResponse};
use stellar_xdr::curr::{AccountEntry, Hash, TransactionEnvelope};

/// Network a contract call is sent to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvConfigs {
    pub rpc_url: String,
    pub network_passphrase: String,
}

#[derive(Clone)]
pub struct Env {
    pub(crate) rpc_client: Arc<dyn RpcClient + Send + Sync>,
    pub(crate) configs: EnvConfigs,
}

impl Env {
    pub fn new(configs: EnvConfigs) -> Result<Self, ClientError> {
        let client = ExternalRpcClient::new(&configs.rpc_url)?;
        Ok(Self::with_rpc_client(configs, Arc::new(client)))
    }

    /// Builds an environment on top of an arbitrary [`RpcClient`].
    pub fn with_rpc_client(
        configs: EnvConfigs,
        rpc_client: Arc<dyn RpcClient + Send + Sync>,
    ) -> Self {
        Self {
            rpc_client,
            configs,
        }
    }

    pub fn rpc_url(&self) -> &str {
        &self.configs.rpc_url
    }

    pub fn network_passphrase(&self) -> &str {
        &self.configs.network_passphrase
    }

    pub fn network_id(&self) -> Hash {
        crypto::sha256_hash(self.configs.network_passphrase.as_bytes())
    }

    pub async fn get_account(&self, account_id: &str) -> Result<AccountEntry, ClientError> {
        self.rpc_client
            .get_account(account_id)
            .await
            .map_err(|e| with_context(e, &format!("Failed to get account {}", account_id)))
    }

    pub async fn simulate_transaction(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<SimulateTransactionResponse, ClientError> {
        self.rpc_client
            .simulate_transaction_envelope(tx_envelope)
            .await
            .map_err(|e| with_context(e, "Failed to simulate transaction"))
    }

    pub async fn send_transaction(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<GetTransactionResponse, ClientError> {
        self.rpc_client
            .send_transaction_polling(tx_envelope)
            .await
            .map_err(|e| with_context(e, "Failed to send transaction"))
    }
}

/// Prefixes transport failures with what was being attempted. Verdicts from
/// the network pass through untouched.
fn with_context(err: ClientError, context: &str) -> ClientError {
    match err {
        ClientError::NetworkRequestFailed(msg) => {
            ClientError::NetworkRequestFailed(format!("{}: {}", context, msg))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{mock_env, mock_signer1, mock_transaction_envelope};

    #[test]
    fn test_network_id_is_passphrase_hash() {
        let env = Env::new(EnvConfigs {
            rpc_url: "https://soroban-testnet.stellar.org".to_string(),
            network_passphrase: "Test SDF Network ; September 2015".to_string(),
        })
        .unwrap();

        assert_eq!(
            hex::encode(env.network_id().0),
            "cee0302d59844d32bdca915c8203dd44b33fbb7edc19051ea37abedf28ecd472"
        );
        assert_eq!(env.network_passphrase(), "Test SDF Network ; September 2015");
        assert_eq!(env.rpc_url(), "https://soroban-testnet.stellar.org");
    }

    #[tokio::test]
    async fn test_get_account_wraps_rpc_error() {
        let env = mock_env(
            Some(Err(ClientError::NetworkRequestFailed("boom".to_string()))),
            None,
            None,
        );
        let account_id = mock_signer1().account_id().to_string();

        let err = env.get_account(&account_id).await.unwrap_err();
        match err {
            ClientError::NetworkRequestFailed(msg) => {
                assert!(msg.contains(&account_id));
                assert!(msg.contains("boom"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_send_transaction_wraps_rpc_error() {
        let env = mock_env(
            None,
            None,
            Some(Err(ClientError::NetworkRequestFailed("rejected".to_string()))),
        );
        let envelope = mock_transaction_envelope(mock_signer1().account_id());

        let err = env.send_transaction(&envelope).await.unwrap_err();
        assert_eq!(
            err,
            ClientError::NetworkRequestFailed("Failed to send transaction: rejected".to_string())
        );
    }

    #[tokio::test]
    async fn test_send_transaction_keeps_rejection() {
        let env = mock_env(
            None,
            None,
            Some(Err(ClientError::TransactionFailed("TxFailed".to_string()))),
        );
        let envelope = mock_transaction_envelope(mock_signer1().account_id());

        let err = env.send_transaction(&envelope).await.unwrap_err();
        assert_eq!(err, ClientError::TransactionFailed("TxFailed".to_string()));
    }
}
