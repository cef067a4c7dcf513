//! Errors that can occur while running the call scripts

use billiard_rs::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    /// Building, submitting or parsing the contract call failed
    #[error(transparent)]
    Client(#[from] ClientError),
    /// A parsed argument does not fit the contract's integer type
    #[error("Argument {0} does not fit in a u64")]
    ArgumentOutOfRange(String),
    /// The returned value could not be rendered as JSON
    #[error("Error rendering call result: {0}")]
    Render(#[from] serde_json::Error),
}
