use std::io;

use thiserror::Error;

/// Library-wide error type for viteconf operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Resolved configuration could not be encoded for output.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Serialize(value.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(value: toml::ser::Error) -> Self {
        AppError::Serialize(value.to_string())
    }
}
