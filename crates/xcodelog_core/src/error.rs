//! Error types.

use thiserror::Error;

/// Errors that can occur while reading a log or building a report.
#[derive(Debug, Error)]
pub enum XcodelogError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl XcodelogError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
