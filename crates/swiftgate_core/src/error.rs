//! Pipeline error types.

use thiserror::Error;

/// Errors that can occur while acquiring or reporting lint results.
#[derive(Debug, Error)]
pub enum LintError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The SwiftLint report could not be decoded.
    #[error("Report decode error: {0}")]
    Decode(String),

    /// A git invocation failed or produced unparseable output.
    #[error("Git error: {0}")]
    Git(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LintError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a report decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Creates a git error.
    pub fn git(message: impl Into<String>) -> Self {
        Self::Git(message.into())
    }
}
