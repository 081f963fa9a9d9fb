//! Error types for the USSD session simulator.

use thiserror::Error;

/// Main error type for USSD simulator operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Dial code failed local validation
    #[error("Invalid dial code: {0}")]
    InvalidDialCode(String),

    /// Key string could not be parsed
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Transport-level failure (bad status, unreachable host, malformed body)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Gateway did not answer within the configured timeout
    #[error("Gateway timed out after {0}ms")]
    Timeout(u64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error ends the session from the engine's point of view.
    ///
    /// Transport failures and timeouts force the session into its closing
    /// phase; local validation errors are recoverable.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Timeout(_))
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
