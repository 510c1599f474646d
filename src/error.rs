//! Error types for twenty.

use thiserror::Error;

/// Errors that can occur while running twenty.
#[derive(Debug, Error)]
pub enum TwentyError {
    /// Configuration file or environment problem.
    #[error("{0}")]
    Config(String),

    /// A user-supplied duration could not be parsed.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// A period was configured with zero total length.
    #[error("{0} must be longer than zero seconds")]
    ZeroLengthPeriod(&'static str),

    /// Filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}
