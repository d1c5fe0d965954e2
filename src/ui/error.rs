//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error while driving the terminal
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The selection could not be serialized for output
    #[error("Failed to serialize selection: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
