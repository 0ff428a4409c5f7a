//! Mock finder and revealer for testing

use super::error::{Result, UiError};
use super::traits::{FolderFinder, Revealer};
use super::types::FinderResult;
use crate::picker::PickerSession;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Mock finder that types a scripted sequence of queries
///
/// Each query is pushed into the session in turn, then the item at
/// `selection` of the final visible list is accepted (or the run is aborted).
#[derive(Debug, Clone, Default)]
pub struct MockFinder {
    /// Queries to apply, in order
    pub queries: Vec<String>,
    /// Visible index to accept after the last query
    pub selection: Option<usize>,
    /// Whether to simulate user abort
    pub should_abort: bool,
    /// Descriptions visible after each query (for assertions)
    pub seen: RefCell<Vec<Vec<String>>>,
    /// Placeholder shown when the loading state was drawn
    pub loading_seen: RefCell<Option<String>>,
}

impl MockFinder {
    /// Create a mock finder that accepts `selection` after typing `queries`
    #[must_use]
    pub fn new(queries: &[&str], selection: usize) -> Self {
        Self {
            queries: queries.iter().map(ToString::to_string).collect(),
            selection: Some(selection),
            ..Self::default()
        }
    }

    /// Create a mock finder that simulates user abort
    #[must_use]
    pub fn aborted() -> Self {
        Self {
            should_abort: true,
            ..Self::default()
        }
    }
}

impl FolderFinder for MockFinder {
    fn loading(&self, session: &PickerSession) -> Result<()> {
        if session.is_busy() {
            *self.loading_seen.borrow_mut() = Some(session.placeholder().to_string());
        }
        Ok(())
    }

    fn run(&self, session: &mut PickerSession) -> Result<FinderResult> {
        for query in &self.queries {
            session
                .set_query(query)
                .map_err(|e| UiError::SessionError(e.to_string()))?;
            self.seen.borrow_mut().push(
                session
                    .visible()
                    .iter()
                    .map(|item| item.description.clone())
                    .collect(),
            );
        }

        if self.should_abort {
            return Ok(FinderResult::aborted());
        }

        Ok(self
            .selection
            .map_or_else(FinderResult::aborted, FinderResult::selected))
    }
}

/// Revealer that records locations instead of acting on them
#[derive(Debug, Default)]
pub struct MockRevealer {
    /// Locations revealed so far
    pub revealed: RefCell<Vec<PathBuf>>,
    /// Whether every reveal should fail
    pub should_fail: bool,
}

impl MockRevealer {
    /// Create a revealer whose host action always fails
    #[must_use]
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

impl Revealer for MockRevealer {
    fn reveal(&self, location: &Path) -> Result<()> {
        if self.should_fail {
            return Err(UiError::RevealError {
                path: location.display().to_string(),
                reason: "explorer unavailable".to_string(),
            });
        }
        self.revealed.borrow_mut().push(location.to_path_buf());
        Ok(())
    }
}
