//! Error types surfaced to the host when a config load or a command fails.

use thiserror::Error;

/// Every failure the plugin can report.
///
/// Config problems block startup or a reload; command problems are raised
/// per invocation and leave the plugin state untouched.
#[derive(Debug, Error)]
pub enum QAndAError {
    #[error("Unable to decode file contents as JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidCommand(String),

    #[error("Unable to read config file: {0}")]
    Io(#[from] std::io::Error),
}

impl QAndAError {
    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::InvalidCommand(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, QAndAError>;
