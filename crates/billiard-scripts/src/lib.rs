//! Scripts calling `init` on the deployed Billiard contract.
pub mod bindings;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;

pub use commands::{BILLIARD_CONTRACT_ID, InitArgs, render_value, run_init};
pub use config::{Command, Config};
pub use errors::ScriptError;
