//! Ratatui-based folder finder implementation
//!
//! Implements the `FolderFinder` trait on top of a crossterm terminal. The
//! TUI draws to stderr so stdout stays free for the chosen path.

use super::events::{EventResult, poll_and_handle};
use super::state::{Exit, Mode, ViewState};
use super::theme::Theme;
use super::widgets::{Footer, FooterText, HelpOverlay, ItemList, SearchBar};
use crate::picker::PickerSession;
use crate::ui::error::{Result, UiError};
use crate::ui::traits::FolderFinder;
use crate::ui::types::FinderResult;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Stderr};
use std::time::Duration;
use tracing::{debug, warn};

type StderrTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Ratatui-based folder finder
///
/// The terminal is opened by [`FolderFinder::loading`] so the busy frame is
/// on screen during the walk, then reused by [`FolderFinder::run`].
#[derive(Default)]
pub struct RatatuiFinder {
    theme: Theme,
    terminal: RefCell<Option<StderrTerminal>>,
}

impl fmt::Debug for RatatuiFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatatuiFinder")
            .field("theme", &self.theme)
            .field("open", &self.terminal.borrow().is_some())
            .finish()
    }
}

impl RatatuiFinder {
    /// Create a new ratatui finder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn setup_terminal() -> Result<StderrTerminal> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
        Terminal::new(CrosstermBackend::new(stderr)).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    fn render(&self, frame: &mut Frame, state: &mut ViewState, session: &PickerSession) {
        let area = frame.area();

        // search bar, list borders, footer
        state.list.height = area.height.saturating_sub(8) as usize;

        let [search, list, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .areas(area);

        frame.render_widget(
            SearchBar::new(state.query.text(), state.query.caret(), &self.theme)
                .title(session.title())
                .placeholder(session.placeholder()),
            search,
        );

        frame.render_widget(ItemList::new(session, &state.list, &self.theme), list);

        let text = if session.is_busy() {
            FooterText::Busy(session.placeholder())
        } else if let Some(notice) = state.notice() {
            FooterText::Notice(&notice.text)
        } else {
            FooterText::Keys
        };
        frame.render_widget(
            Footer::new(text, session.visible_len(), session.total(), &self.theme),
            footer,
        );

        if state.mode == Mode::Help {
            frame.render_widget(HelpOverlay::new(&self.theme), area);
        }
    }

    /// Apply the outcome of one handled event to the session
    fn apply(state: &mut ViewState, session: &mut PickerSession, result: EventResult) -> Result<()> {
        match result {
            EventResult::QueryChanged => {
                session
                    .set_query(state.query.text())
                    .map_err(|e| UiError::SessionError(e.to_string()))?;
                state.list.reset(session.visible_len());
                debug!(query = state.query.text(), visible = state.list.len, "re-ranked folders");
                if state.list.len == 0 {
                    state.notify("No matching folders");
                }
            }
            EventResult::Confirm if state.list.len == 0 => state.notify("Nothing to open"),
            EventResult::Confirm => state.exit = Some(Exit::Accept),
            EventResult::Abort => state.exit = Some(Exit::Dismiss),
            EventResult::Continue | EventResult::Ignored => {}
        }
        Ok(())
    }

    fn run_loop(&self, terminal: &mut StderrTerminal, session: &mut PickerSession) -> Result<FinderResult> {
        let mut state = ViewState::new(session.visible_len());
        session.query().chars().for_each(|c| state.query.insert(c));

        while state.exit.is_none() {
            terminal.draw(|frame| self.render(frame, &mut state, &*session))?;

            let result = poll_and_handle(&mut state, Duration::from_millis(50))?;
            Self::apply(&mut state, session, result)?;
            state.expire_notice();
        }

        Ok(Self::finish(&state))
    }

    const fn finish(state: &ViewState) -> FinderResult {
        match state.exit {
            Some(Exit::Accept) => FinderResult::selected(state.list.selected),
            _ => FinderResult::aborted(),
        }
    }
}

impl FolderFinder for RatatuiFinder {
    fn loading(&self, session: &PickerSession) -> Result<()> {
        let mut slot = self.terminal.borrow_mut();
        if slot.is_none() {
            *slot = Some(Self::setup_terminal()?);
        }
        if let Some(terminal) = slot.as_mut() {
            let mut state = ViewState::new(0);
            terminal.draw(|frame| self.render(frame, &mut state, session))?;
        }
        Ok(())
    }

    fn run(&self, session: &mut PickerSession) -> Result<FinderResult> {
        let opened = self.terminal.borrow_mut().take();
        let mut terminal = match opened {
            Some(terminal) => terminal,
            None => Self::setup_terminal()?,
        };

        let result = self.run_loop(&mut terminal, session);
        drop(terminal);

        // Cleanup always runs; the loop's result wins over a cleanup failure
        if let Err(e) = Self::cleanup_terminal() {
            warn!("terminal cleanup failed: {e}");
        }

        result
    }
}

impl Drop for RatatuiFinder {
    // The walk failed after the loading frame was drawn
    fn drop(&mut self) {
        if self.terminal.get_mut().take().is_some() {
            if let Err(e) = Self::cleanup_terminal() {
                warn!("terminal cleanup failed: {e}");
            }
        }
    }
}
