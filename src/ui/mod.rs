//! UI abstraction layer
//!
//! The picker core never talks to a terminal directly. It goes through
//! three seams, each a stand-in for a host service:
//!
//! - **`FolderFinder`** - the quick-pick widget (query box, list, accept/dismiss)
//! - **`Revealer`** - the "show me this folder" action
//! - **`OutputWriter`** - the user-facing notification surface
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Picker Session                     │
//! │   (cache, query, ranking)               │
//! └────────────────┬────────────────────────┘
//!                  │ Driven by
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UI Trait Abstraction               │
//! │  (FolderFinder, Revealer, OutputWriter) │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ CLI Adapters  │  │ TUI Adapter       │
//! │ - Print/Open  │  │ - RatatuiFinder   │
//! │ - Stdout      │  │                   │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Custom Finder
//!
//! ```no_run
//! use goto_folder::picker::PickerSession;
//! use goto_folder::ui::{FinderResult, FolderFinder, Result};
//!
//! struct FirstMatch(String);
//!
//! impl FolderFinder for FirstMatch {
//!     fn run(&self, session: &mut PickerSession) -> Result<FinderResult> {
//!         session
//!             .set_query(&self.0)
//!             .map_err(|e| goto_folder::ui::UiError::SessionError(e.to_string()))?;
//!         if session.visible_len() == 0 {
//!             return Ok(FinderResult::aborted());
//!         }
//!         Ok(FinderResult::selected(0))
//!     }
//! }
//! ```

mod error;
mod reveal;
mod traits;
mod types;

pub mod output;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use output::{OutputWriter, StdoutWriter};
pub use ratatui_adapter::RatatuiFinder;
pub use reveal::{OpenRevealer, PrintRevealer, revealer_for};
pub use traits::{FolderFinder, Revealer};
pub use types::{DisplayItem, FinderResult, RevealMode};
