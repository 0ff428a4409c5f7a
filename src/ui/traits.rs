//! Core traits for the host UI seams

use super::error::Result;
use super::types::FinderResult;
use crate::picker::PickerSession;
use std::path::Path;

/// Interactive folder picker
///
/// The finder owns rendering and keyboard handling only. Every query edit
/// is pushed into the session, and what gets rendered is whatever the
/// session reports as visible.
pub trait FolderFinder {
    /// Run the picker against a loaded session
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be driven or the session
    /// rejects a query update.
    fn run(&self, session: &mut PickerSession) -> Result<FinderResult>;

    /// Show the busy state while the session walks its roots
    ///
    /// Called once, with the session in `Loading`, before the walk starts.
    ///
    /// # Errors
    ///
    /// Returns an error if the loading state cannot be displayed.
    fn loading(&self, session: &PickerSession) -> Result<()> {
        let _ = session;
        Ok(())
    }
}

/// Host action that shows a chosen folder to the user
pub trait Revealer {
    /// Reveal `location`
    ///
    /// # Errors
    ///
    /// Returns an error if the host action fails.
    fn reveal(&self, location: &Path) -> Result<()>;
}

impl<R: Revealer + ?Sized> Revealer for Box<R> {
    fn reveal(&self, location: &Path) -> Result<()> {
        (**self).reveal(location)
    }
}
