//! Error types for the Sui submitter

use thiserror::Error;

/// Main error type for signing and submission
#[derive(Error, Debug)]
pub enum SignerError {
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Unknown transaction kind: \"{kind}\"")]
    UnknownTransactionKind { kind: String },

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("No provider configured for {operation}")]
    ProviderUnavailable { operation: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Faucet error: {0}")]
    Faucet(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl SignerError {
    /// Check if a caller could reasonably retry the failed operation.
    ///
    /// Nothing in this crate retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SignerError::Transport(_))
    }
}

impl From<reqwest::Error> for SignerError {
    fn from(e: reqwest::Error) -> Self {
        SignerError::Transport(e.to_string())
    }
}

/// Result type for submitter operations
pub type SignerResult<T> = Result<T, SignerError>;
