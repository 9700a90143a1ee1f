//! Crate-wide error type.
//!
//! Every failure carries the exit code the binary terminates with, so the
//! library can stay agnostic of process handling.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Parameters rejected before any network call.
    #[error("{0}")]
    Validation(String),

    /// Bad client configuration (base URL, logging setup).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The request could not be sent or the body could not be read.
    #[error("{0}")]
    Network(String),

    /// The server answered with something other than 200.
    #[error("GET returned {0}")]
    HttpStatus(u16),

    #[error("could not decode JSON from chess.com: {0}")]
    Decode(String),

    #[error("user {user} has no rating history")]
    EmptyHistory { user: String },

    /// Regression input that does not determine a line.
    #[error("cannot fit rating trend: {0}")]
    Fit(String),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Validation(_) | AppError::Config(_) => 2,
            AppError::Network(_)
            | AppError::HttpStatus(_)
            | AppError::Decode(_)
            | AppError::EmptyHistory { .. } => 4,
            AppError::Fit(_) => 5,
        }
    }
}
