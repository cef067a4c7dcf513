use billiard_rs::{ContractHandle, Env, EnvConfigs, Friendbot, IntoScVal, Signer};
use dotenv::from_path;
use std::{env, path::Path};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    from_path(Path::new("examples/.env")).ok();

    let contract_id = env::var("BILLIARD_CONTRACT_ID")
        .expect("BILLIARD_CONTRACT_ID must be set in .env file");

    // Creates a new environment
    let env = Env::new(EnvConfigs {
        rpc_url: "https://soroban-testnet.stellar.org".to_string(),
        network_passphrase: "Test SDF Network ; September 2015".to_string(),
    })?;

    // A throwaway key, funded on testnet before use
    let signer = Signer::generate();
    Friendbot::new("https://friendbot.stellar.org")
        .fund(&signer)
        .await?;

    let contract = ContractHandle::connect(&contract_id, signer, &env)?;

    let args = vec![1_u64.into_val(), 2_u64.into_val()];
    let call = contract.invoke("init", args).await?;

    println!("Transaction {}: {:?}", call.transaction_id, call.value);
    Ok(())
}
