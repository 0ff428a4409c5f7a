//! Common types for the picker UI

use crate::collector::FolderRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How a chosen folder is handed back to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    /// Print the absolute path on stdout (for `cd "$(goto-folder)"`)
    #[default]
    Print,
    /// Open the folder in the system file manager
    Open,
}

impl RevealMode {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Open => "open",
        }
    }
}

impl fmt::Display for RevealMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RevealMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "print" => Ok(Self::Print),
            "open" => Ok(Self::Open),
            other => Err(format!("unknown reveal mode '{other}' (expected print or open)")),
        }
    }
}

/// Item shown in the folder picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Folder name (last path segment)
    pub label: String,
    /// Relative path, prefixed with `#<root>/` in multi-root workspaces
    pub description: String,
    /// Location to reveal when the item is accepted
    pub location: PathBuf,
}

impl DisplayItem {
    /// Derive a display item from a collected folder
    #[must_use]
    pub fn from_record(record: FolderRecord) -> Self {
        let label = record
            .relative_path
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(record.relative_path.as_str())
            .to_string();

        Self {
            label,
            description: record.relative_path,
            location: record.location,
        }
    }
}

/// Result from a finder run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderResult {
    /// Index of the accepted item within the visible list
    pub selected: Option<usize>,
    /// Whether the user dismissed the picker
    pub aborted: bool,
}

impl FinderResult {
    /// Create result for an accepted item
    #[must_use]
    pub const fn selected(index: usize) -> Self {
        Self {
            selected: Some(index),
            aborted: false,
        }
    }

    /// Create result for a dismissed picker
    #[must_use]
    pub const fn aborted() -> Self {
        Self {
            selected: None,
            aborted: true,
        }
    }
}
