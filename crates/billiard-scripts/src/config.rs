//! Command line and environment configuration of the call scripts

use billiard_rs::EnvConfigs;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use crate::commands::{BILLIARD_CONTRACT_ID, InitArgs};

pub const DEFAULT_RPC_URL: &str = "https://soroban-testnet.stellar.org";
pub const DEFAULT_NETWORK_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// Calls `init` on the deployed Billiard contract from a freshly generated
/// signer and prints the returned value as JSON.
#[derive(Parser, Debug)]
#[command(name = "billiard-scripts", version)]
pub struct Config {
    /// Soroban RPC endpoint
    #[arg(long, env = "BILLIARD_RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Passphrase of the network the contract lives on
    #[arg(long, env = "BILLIARD_NETWORK_PASSPHRASE", default_value = DEFAULT_NETWORK_PASSPHRASE)]
    pub network_passphrase: String,

    /// Contract identifier, 32 bytes of hex or a `C...` strkey
    #[arg(long, env = "BILLIARD_CONTRACT_ID", default_value = BILLIARD_CONTRACT_ID)]
    pub contract_id: String,

    /// Friendbot endpoint used to fund the generated account before the call
    #[arg(long, env = "BILLIARD_FRIENDBOT_URL")]
    pub friendbot_url: Option<String>,

    /// Only show log messages at or above this level. `INFO` by default.
    #[arg(short, long, env = "BILLIARD_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

impl Config {
    pub fn env_configs(&self) -> EnvConfigs {
        EnvConfigs {
            rpc_url: self.rpc_url.clone(),
            network_passphrase: self.network_passphrase.clone(),
        }
    }
}

/// Which revision of `init` to call
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `init("bar")`
    Text,
    /// `init(1, 2)`
    IntegerPair,
    /// `init(100, 100)`, both read from decimal strings at scale 0
    FixedPointPair,
}

impl Command {
    pub fn init_args(self) -> InitArgs {
        match self {
            Command::Text => InitArgs::Text("bar".to_string()),
            Command::IntegerPair => InitArgs::IntegerPair(1, 2),
            Command::FixedPointPair => {
                InitArgs::FixedPointPair("100".to_string(), "100".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["billiard-scripts", "text"]);

        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.network_passphrase, DEFAULT_NETWORK_PASSPHRASE);
        assert_eq!(config.contract_id, BILLIARD_CONTRACT_ID);
        assert_eq!(config.friendbot_url, None);
        assert_eq!(config.log_level, LevelFilter::INFO);
        assert_eq!(config.command, Command::Text);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::parse_from([
            "billiard-scripts",
            "--rpc-url=http://localhost:8000/soroban/rpc",
            "--network-passphrase=Standalone Network ; February 2017",
            "--contract-id=CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
            "--friendbot-url=http://localhost:8000/friendbot",
            "--log-level=debug",
            "fixed-point-pair",
        ]);

        assert_eq!(
            config.env_configs(),
            EnvConfigs {
                rpc_url: "http://localhost:8000/soroban/rpc".to_string(),
                network_passphrase: "Standalone Network ; February 2017".to_string(),
            }
        );
        assert_eq!(
            config.contract_id,
            "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"
        );
        assert_eq!(
            config.friendbot_url.as_deref(),
            Some("http://localhost:8000/friendbot")
        );
        assert_eq!(config.log_level, LevelFilter::DEBUG);
        assert_eq!(config.command, Command::FixedPointPair);
    }

    #[test]
    fn test_requires_variant() {
        assert!(Config::try_parse_from(["billiard-scripts"]).is_err());
        assert!(Config::try_parse_from(["billiard-scripts", "float-pair"]).is_err());
    }

    #[test]
    fn test_variant_arguments() {
        assert_eq!(Command::Text.init_args(), InitArgs::Text("bar".to_string()));
        assert_eq!(Command::IntegerPair.init_args(), InitArgs::IntegerPair(1, 2));
        assert_eq!(
            Command::FixedPointPair.init_args(),
            InitArgs::FixedPointPair("100".to_string(), "100".to_string())
        );
    }
}
