//! # Client Error Handling
//!
//! This module defines the error type shared by every operation of the
//! client library: signer handling, contract invocation, fixed-point
//! parsing and account funding.
use std::{error::Error, fmt};

/// Errors that can occur when calling a deployed contract.
///
/// This enum covers errors from transaction building, simulation, signing,
/// submission and from the conversion of call arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Error when a transaction fails to execute successfully.
    TransactionFailed(String),

    /// Error when a transaction simulation fails.
    TransactionSimulationFailed(String),

    /// Error when a network request to the RPC server fails.
    NetworkRequestFailed(String),

    /// Error when a signing operation fails.
    SigningFailed(String),

    /// Error when XDR encoding or decoding fails.
    XdrEncodingFailed(String),

    /// Error when an invalid argument is provided to a function.
    InvalidArgument(String),

    /// Error when building a transaction fails.
    TransactionBuildFailed(String),

    /// Error when a conversion fails.
    ConversionError(String),

    /// Error when the friendbot refuses to fund an account.
    FundingFailed(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransactionFailed(msg) => write!(f, "Transaction failed: {}", msg),
            Self::TransactionSimulationFailed(msg) => {
                write!(f, "Transaction simulation failed: {}", msg)
            }
            Self::NetworkRequestFailed(msg) => write!(f, "Network request failed: {}", msg),
            Self::SigningFailed(msg) => write!(f, "Signing operation failed: {}", msg),
            Self::XdrEncodingFailed(msg) => write!(f, "XDR encoding failed: {}", msg),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::TransactionBuildFailed(msg) => write!(f, "Transaction build failed: {}", msg),
            Self::ConversionError(msg) => write!(f, "Conversion error: {}", msg),
            Self::FundingFailed(msg) => write!(f, "Funding failed: {}", msg),
        }
    }
}

impl Error for ClientError {}

/// Convert XDR errors into ClientError
impl From<stellar_xdr::curr::Error> for ClientError {
    fn from(err: stellar_xdr::curr::Error) -> Self {
        Self::XdrEncodingFailed(err.to_string())
    }
}

/// Convert HTTP errors raised while talking to the friendbot into ClientError
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::NetworkRequestFailed(err.to_string())
    }
}
