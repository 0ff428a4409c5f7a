//! Folder picker orchestration
//!
//! Ties the collector, the ranker, and the UI seams together into the
//! single "go to folder" command.

mod session;

pub use session::{
    IDLE_PLACEHOLDER, LOADING_PLACEHOLDER, PICKER_TITLE, PickerError, PickerSession,
    READY_PLACEHOLDER, Result, SessionState,
};

use crate::collector::{DirectoryLister, WorkspaceRoot};
use crate::ui::{FolderFinder, Revealer};
use std::path::PathBuf;
use tracing::info;

/// How a picker run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// A folder was chosen and handed to the revealer
    Revealed(PathBuf),
    /// The user cancelled
    Dismissed,
}

/// Run one complete picker session
///
/// Loads every root into `session` (after `finder` has shown its loading
/// state), hands it to `finder`, and reveals the accepted folder. Nothing is retried: the first error ends the run.
///
/// # Errors
///
/// - `PickerError::NoWorkspace` if `roots` is empty
/// - `PickerError::Ui` if the finder or the revealer fails
/// - `PickerError::NoSelection` if the finder accepts an index outside the list
pub fn run_picker<L, F, R>(
    session: &mut PickerSession,
    lister: &L,
    roots: &[WorkspaceRoot],
    finder: &F,
    revealer: &R,
) -> Result<PickOutcome>
where
    L: DirectoryLister + ?Sized,
    F: FolderFinder + ?Sized,
    R: Revealer + ?Sized,
{
    session.load_with(lister, roots, |loading| Ok(finder.loading(loading)?))?;

    let result = finder.run(session)?;
    let selected = match result.selected {
        Some(index) if !result.aborted => index,
        _ => {
            session.dismiss();
            return Ok(PickOutcome::Dismissed);
        }
    };

    let location = session.accept(selected)?;
    revealer.reveal(&location)?;
    info!("Revealed {}", location.display());

    Ok(PickOutcome::Revealed(location))
}
