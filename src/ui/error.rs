//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during UI operations (terminal setup, event polling)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The host could not reveal the chosen folder
    #[error("Failed to reveal {path}: {reason}")]
    RevealError {
        /// Folder that was being revealed
        path: String,
        /// Why it failed
        reason: String,
    },

    /// The picker session rejected an operation
    #[error("Picker session error: {0}")]
    SessionError(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
