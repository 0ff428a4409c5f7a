//! Goto Folder - fuzzy "go to folder" picker for workspace directories
//!
//! This library collects every folder beneath one or more workspace roots
//! (skipping tooling directories and stopping at a fixed depth), ranks them
//! against a typed query with a path-aware subsequence scorer, and drives an
//! interactive picker whose accepted entry is revealed to the user.

use thiserror::Error;

pub mod cli;
pub mod collector;
pub mod config;
pub mod fuzzy;
pub mod picker;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum GotoError {
    /// Picker session error
    #[error(transparent)]
    PickerError(#[from] picker::PickerError),
    /// UI or host action error
    #[error(transparent)]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
