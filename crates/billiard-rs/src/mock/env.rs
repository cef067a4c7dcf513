use crate::Signer;
use crate::error::ClientError;
use crate::{Env, EnvConfigs};
use ed25519_dalek::SigningKey;
use std::str::FromStr;
use std::sync::Arc;
use stellar_rpc_client::{GetTransactionResponse, SimulateTransactionResponse};
use stellar_strkey::ed25519::PrivateKey;
use stellar_xdr::curr::{
    AccountEntry, AccountEntryExt, AccountId, PublicKey, String32, Thresholds, VecM,
};

use super::rpc::MockRpcClient;

/// Creates a mock environment with configurable responses
pub fn mock_env(
    get_account_result: Option<Result<AccountEntry, ClientError>>,
    simulate_transaction_envelope_result: Option<
        Result<SimulateTransactionResponse, ClientError>,
    >,
    send_transaction_polling_result: Option<Result<GetTransactionResponse, ClientError>>,
) -> Env {
    mock_env_with_client(Arc::new(MockRpcClient::new(
        get_account_result,
        simulate_transaction_envelope_result,
        send_transaction_polling_result,
    )))
}

/// Creates a mock environment around a client the caller keeps a handle on,
/// so recorded calls can be inspected afterwards.
pub fn mock_env_with_client(client: Arc<MockRpcClient>) -> Env {
    let random_id = rand::random::<u64>();
    let network_passphrase = format!("Mock Test Random Network {}", random_id);

    Env::with_rpc_client(
        EnvConfigs {
            rpc_url: "http://test.com".to_string(),
            network_passphrase,
        },
        client,
    )
}

/// Creates the first mock signer with a predefined private key
pub fn mock_signer1() -> Signer {
    let pk = PrivateKey::from_string("SD3C2X7WPTUYX4YHL2G34PX75JZ35QJDFKM6SXDLYHWIPOWPIQUXFVLE")
        .unwrap();
    Signer::new(SigningKey::from_bytes(&pk.0))
}

/// Creates the second mock signer with a predefined private key
pub fn mock_signer2() -> Signer {
    let pk = PrivateKey::from_string("SDFLNQOG3PV4CYJ4BNUXFXJBBOCQ57MK2NYUK4XUVVJTT2JSA3YDJA3A")
        .unwrap();
    Signer::new(SigningKey::from_bytes(&pk.0))
}

/// Creates a mock account entry with specified account ID
pub fn mock_account_entry(account_id: &str) -> AccountEntry {
    AccountEntry {
        account_id: AccountId(PublicKey::from_str(account_id).unwrap()),
        balance: 0,
        ext: AccountEntryExt::V0,
        flags: 0,
        home_domain: String32::default(),
        inflation_dest: None,
        seq_num: 0.into(),
        num_sub_entries: 0,
        signers: VecM::default(),
        thresholds: Thresholds([0, 0, 0, 0]),
    }
}
