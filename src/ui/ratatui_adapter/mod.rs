//! Ratatui-based folder finder
//!
//! Implements the `FolderFinder` trait with ratatui widgets and crossterm
//! events. Ranking stays in the picker session; this module only draws what
//! the session reports as visible and feeds query edits back into it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiFinder                     │
//! │  (implements FolderFinder trait)            │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  Session   │ │  Ratatui  │ │ Crossterm │
//! │ (ranking)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod events;
mod finder;
mod state;
mod theme;
pub mod widgets;

pub use finder::RatatuiFinder;
pub use state::{Exit, ListCursor, Mode, QueryLine, ViewState};
pub use theme::Theme;
