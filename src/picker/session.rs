//! Picker session
//!
//! One session per invocation. It owns the folder cache, the query, and
//! the current ranking, so nothing leaks between invocations.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──load()──► Loading ──walk done──► Ready ──accept()──► Accepted
//!  │                                        │  ▲
//!  └─ no roots: NoWorkspace, stays Idle     │  └─ set_query() (re-rank cache)
//!                                           └──dismiss()──► Dismissed
//! ```

use crate::collector::{CollectOptions, DirectoryLister, WorkspaceRoot, collect_workspace};
use crate::fuzzy::{Ranked, rank};
use crate::ui::{DisplayItem, UiError};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Title shown above the picker
pub const PICKER_TITLE: &str = "Go to Folder...";
/// Placeholder while folders are being collected
pub const LOADING_PLACEHOLDER: &str = "Loading folders...";
/// Placeholder once the list is ready
pub const READY_PLACEHOLDER: &str = "Type to search folders (fuzzy matching enabled)";
/// Placeholder before anything has been loaded
pub const IDLE_PLACEHOLDER: &str = "Search folders by name";

/// Picker session error type
pub type Result<T> = std::result::Result<T, PickerError>;

/// Errors that can occur during a picker session
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// No workspace root was given
    #[error("No workspace folder is open. Please open a folder first.")]
    NoWorkspace,

    /// The operation is not allowed in the session's current state
    #[error("Invalid state: cannot {action} while {state}")]
    InvalidState {
        /// What was attempted
        action: &'static str,
        /// State the session was in
        state: &'static str,
    },

    /// The accepted index is outside the visible list
    #[error("No folder at position {0} in the current list")]
    NoSelection(usize),

    /// The finder or the revealer failed
    #[error(transparent)]
    Ui(#[from] UiError),
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Created, nothing loaded
    Idle,
    /// Walking the workspace roots
    Loading,
    /// Folder list cached; queries re-rank it
    Ready,
    /// An item was chosen
    Accepted(PathBuf),
    /// The user cancelled
    Dismissed,
}

impl SessionState {
    const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Accepted(_) => "accepted",
            Self::Dismissed => "dismissed",
        }
    }
}

/// A single folder-picking session
#[derive(Debug)]
pub struct PickerSession {
    options: CollectOptions,
    state: SessionState,
    items: Vec<DisplayItem>,
    query: String,
    visible: Vec<Ranked>,
}

impl PickerSession {
    /// Create an idle session
    #[must_use]
    pub const fn new(options: CollectOptions) -> Self {
        Self {
            options,
            state: SessionState::Idle,
            items: Vec::new(),
            query: String::new(),
            visible: Vec::new(),
        }
    }

    /// Walk every root and cache the resulting items
    ///
    /// # Errors
    ///
    /// - `PickerError::NoWorkspace` if `roots` is empty (the session stays idle)
    /// - `PickerError::InvalidState` if the session is not idle
    pub fn load<L>(&mut self, lister: &L, roots: &[WorkspaceRoot]) -> Result<()>
    where
        L: DirectoryLister + ?Sized,
    {
        self.load_with(lister, roots, |_| Ok(()))
    }

    /// Like [`load`](Self::load), calling `on_loading` once the session is
    /// in the `Loading` state and before the walk starts
    ///
    /// # Errors
    ///
    /// Same as `load`, plus whatever `on_loading` returns. A failing hook
    /// puts the session back to idle.
    pub fn load_with<L, F>(
        &mut self,
        lister: &L,
        roots: &[WorkspaceRoot],
        on_loading: F,
    ) -> Result<()>
    where
        L: DirectoryLister + ?Sized,
        F: FnOnce(&Self) -> Result<()>,
    {
        self.require(&SessionState::Idle, "load folders")?;

        if roots.is_empty() {
            warn!("Folder search requested without any workspace root");
            return Err(PickerError::NoWorkspace);
        }

        self.state = SessionState::Loading;
        info!("Loading folders from {} root(s)", roots.len());

        if let Err(e) = on_loading(self) {
            self.state = SessionState::Idle;
            return Err(e);
        }

        self.items = collect_workspace(lister, roots, &self.options)
            .into_iter()
            .map(DisplayItem::from_record)
            .collect();

        self.state = SessionState::Ready;
        self.query.clear();
        self.refilter();
        Ok(())
    }

    /// Replace the query and re-rank the cached items
    ///
    /// # Errors
    ///
    /// Returns `PickerError::InvalidState` unless the session is ready.
    pub fn set_query(&mut self, query: impl Into<String>) -> Result<()> {
        self.require(&SessionState::Ready, "change the query")?;
        self.query = query.into();
        self.refilter();
        debug!(
            "Query {:?} matched {}/{} folders",
            self.query,
            self.visible.len(),
            self.items.len()
        );
        Ok(())
    }

    /// Accept the item at `index` of the visible list
    ///
    /// # Errors
    ///
    /// - `PickerError::InvalidState` unless the session is ready
    /// - `PickerError::NoSelection` if `index` is outside the visible list
    pub fn accept(&mut self, index: usize) -> Result<PathBuf> {
        self.require(&SessionState::Ready, "accept a folder")?;

        let location = self
            .visible_item(index)
            .map(|item| item.location.clone())
            .ok_or(PickerError::NoSelection(index))?;

        info!("Accepted folder {}", location.display());
        self.state = SessionState::Accepted(location.clone());
        Ok(location)
    }

    /// Cancel the session; finished sessions are left untouched
    pub fn dismiss(&mut self) {
        if !self.is_finished() {
            debug!("Picker dismissed while {}", self.state.name());
            self.state = SessionState::Dismissed;
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether the session has been accepted or dismissed
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(
            self.state,
            SessionState::Accepted(_) | SessionState::Dismissed
        )
    }

    /// Current query
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of cached items
    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Items matching the current query, best first
    #[must_use]
    pub fn visible(&self) -> Vec<&DisplayItem> {
        self.visible
            .iter()
            .filter_map(|ranked| self.items.get(ranked.index))
            .collect()
    }

    /// Number of items matching the current query
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Item at `index` of the visible list
    #[must_use]
    pub fn visible_item(&self, index: usize) -> Option<&DisplayItem> {
        self.visible
            .get(index)
            .and_then(|ranked| self.items.get(ranked.index))
    }

    /// Score of the item at `index` of the visible list
    #[must_use]
    pub fn visible_score(&self, index: usize) -> Option<u32> {
        self.visible.get(index).map(|ranked| ranked.score)
    }

    /// Title for the picker widget
    #[must_use]
    pub const fn title(&self) -> &'static str {
        PICKER_TITLE
    }

    /// Placeholder for the query box
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self.state {
            SessionState::Loading => LOADING_PLACEHOLDER,
            SessionState::Idle => IDLE_PLACEHOLDER,
            _ => READY_PLACEHOLDER,
        }
    }

    /// Whether the picker should show its busy indicator
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    fn refilter(&mut self) {
        self.visible = rank(&self.query, &self.items, |item| item.description.as_str());
    }

    fn require(&self, expected: &SessionState, action: &'static str) -> Result<()> {
        if &self.state == expected {
            Ok(())
        } else {
            Err(PickerError::InvalidState {
                action,
                state: self.state.name(),
            })
        }
    }
}

impl Default for PickerSession {
    fn default() -> Self {
        Self::new(CollectOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryLister;

    fn lister() -> MemoryLister {
        MemoryLister::new()
            .with_dirs("/ws", &["src", "node_modules", "docs"])
            .with_dirs("/ws/src", &["app"])
            .with_dirs("/ws/src/app", &["about"])
            .with_dirs("/ws/node_modules", &["x"])
    }

    fn ready_session() -> PickerSession {
        let mut session = PickerSession::default();
        session
            .load(&lister(), &[WorkspaceRoot::from_path("/ws")])
            .unwrap();
        session
    }

    fn visible_descriptions(session: &PickerSession) -> Vec<&str> {
        session
            .visible()
            .iter()
            .map(|item| item.description.as_str())
            .collect()
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = PickerSession::default();
        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.placeholder(), IDLE_PLACEHOLDER);
        assert_eq!(session.title(), PICKER_TITLE);
        assert_eq!(session.total(), 0);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_load_without_roots_stays_idle() {
        let mut session = PickerSession::default();
        let result = session.load(&lister(), &[]);

        assert!(matches!(result, Err(PickerError::NoWorkspace)));
        assert_eq!(session.state(), &SessionState::Idle);
    }

    #[test]
    fn test_load_populates_cache_and_shows_everything() {
        let session = ready_session();

        assert_eq!(session.state(), &SessionState::Ready);
        assert_eq!(session.placeholder(), READY_PLACEHOLDER);
        assert_eq!(
            visible_descriptions(&session),
            vec!["src", "src/app", "src/app/about", "docs"]
        );
        assert_eq!(session.total(), 4);
        assert_eq!(session.visible_item(2).unwrap().label, "about");
    }

    #[test]
    fn test_loading_hook_sees_busy_session() {
        let mut session = PickerSession::default();
        let mut seen = None;

        session
            .load_with(&lister(), &[WorkspaceRoot::from_path("/ws")], |s| {
                seen = Some((s.state().clone(), s.placeholder(), s.is_busy(), s.total()));
                Ok(())
            })
            .unwrap();

        assert_eq!(
            seen,
            Some((SessionState::Loading, LOADING_PLACEHOLDER, true, 0))
        );
        assert_eq!(session.state(), &SessionState::Ready);
    }

    #[test]
    fn test_failing_loading_hook_leaves_session_idle() {
        let mut session = PickerSession::default();

        let result = session.load_with(&lister(), &[WorkspaceRoot::from_path("/ws")], |_| {
            Err(PickerError::Ui(UiError::SessionError("terminal gone".to_string())))
        });

        assert!(matches!(result, Err(PickerError::Ui(_))));
        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.total(), 0);
    }

    #[test]
    fn test_load_twice_is_rejected() {
        let mut session = ready_session();
        let result = session.load(&lister(), &[WorkspaceRoot::from_path("/ws")]);
        assert!(matches!(result, Err(PickerError::InvalidState { .. })));
    }

    #[test]
    fn test_query_filters_and_sorts() {
        let mut session = ready_session();

        session.set_query("srcabout").unwrap();
        assert_eq!(visible_descriptions(&session), vec!["src/app/about"]);

        session.set_query("zzz").unwrap();
        assert!(session.visible().is_empty());

        session.set_query("app").unwrap();
        assert_eq!(
            visible_descriptions(&session),
            vec!["src/app", "src/app/about"]
        );
        assert_eq!(session.visible_score(0), Some(16));
    }

    #[test]
    fn test_clearing_query_restores_full_list() {
        let mut session = ready_session();
        session.set_query("docs").unwrap();
        assert_eq!(session.visible_len(), 1);

        session.set_query("").unwrap();
        assert_eq!(session.visible_len(), session.total());
        assert_eq!(session.query(), "");
    }

    #[test]
    fn test_query_before_load_is_rejected() {
        let mut session = PickerSession::default();
        assert!(matches!(
            session.set_query("src"),
            Err(PickerError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_accept_uses_visible_index() {
        let mut session = ready_session();
        session.set_query("about").unwrap();

        let location = session.accept(0).unwrap();

        assert_eq!(location, PathBuf::from("/ws/src/app/about"));
        assert_eq!(session.state(), &SessionState::Accepted(location));
        assert!(session.is_finished());
    }

    #[test]
    fn test_accept_out_of_range() {
        let mut session = ready_session();
        session.set_query("zzz").unwrap();

        assert!(matches!(session.accept(0), Err(PickerError::NoSelection(0))));
        assert_eq!(session.state(), &SessionState::Ready);
    }

    #[test]
    fn test_dismiss_ends_session() {
        let mut session = ready_session();
        session.dismiss();

        assert_eq!(session.state(), &SessionState::Dismissed);
        assert!(matches!(
            session.set_query("src"),
            Err(PickerError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_dismiss_after_accept_keeps_acceptance() {
        let mut session = ready_session();
        let location = session.accept(0).unwrap();
        session.dismiss();
        assert_eq!(session.state(), &SessionState::Accepted(location));
    }

    #[test]
    fn test_sessions_do_not_share_cache() {
        let first = ready_session();
        let second = PickerSession::default();
        assert_eq!(first.total(), 4);
        assert_eq!(second.total(), 0);
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        let mut session = PickerSession::default();

        let err = session.set_query("app").unwrap_err();
        assert_eq!(err.to_string(), "Invalid state: cannot change the query while idle");

        let err = session.load(&lister(), &[]).unwrap_err();
        assert!(err.to_string().contains("open a folder"));

        let mut session = ready_session();
        let err = session.accept(99).unwrap_err();
        assert_eq!(err.to_string(), "No folder at position 99 in the current list");
    }
}
