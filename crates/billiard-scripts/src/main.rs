use billiard_rs::{Env, Friendbot, Signer};
use billiard_scripts::{Config, ScriptError, logging::init_logging, render_value, run_init};
use clap::Parser;
use dotenv::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    dotenv().ok();

    let config = Config::parse();
    init_logging(config.log_level);

    let env = Env::new(config.env_configs())?;

    // A new identity on every run, never stored
    let signer = Signer::generate();
    info!(signer = %signer, "generated signer");

    if let Some(url) = &config.friendbot_url {
        Friendbot::new(url).fund(&signer).await?;
    }

    let call = run_init(
        &env,
        &config.contract_id,
        signer,
        config.command.init_args(),
    )
    .await?;

    println!("{}", render_value(&call)?);
    Ok(())
}
