//! Key and mouse handling for the picker
//!
//! Translates crossterm events into view state edits and tells the loop
//! whether the query changed or the picker should close.

use super::state::{Mode, ViewState};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// What the loop must do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Redraw and keep going
    Continue,
    /// Open the folder under the cursor
    Confirm,
    /// Close without choosing
    Abort,
    /// Query text changed; the session must re-rank
    QueryChanged,
    /// Nothing happened
    Ignored,
}

const fn edited(changed: bool) -> EventResult {
    if changed {
        EventResult::QueryChanged
    } else {
        EventResult::Ignored
    }
}

fn on_key(state: &mut ViewState, key: KeyEvent) -> EventResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let query = &mut state.query;
    let list = &mut state.list;

    match key.code {
        KeyCode::Esc => EventResult::Abort,
        KeyCode::Char('c') if ctrl => EventResult::Abort,
        KeyCode::Enter => EventResult::Confirm,
        KeyCode::F(1) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        KeyCode::Up | KeyCode::BackTab => {
            list.move_by(-1);
            EventResult::Continue
        }
        KeyCode::Char('k' | 'p') if ctrl => {
            list.move_by(-1);
            EventResult::Continue
        }
        KeyCode::Down | KeyCode::Tab => {
            list.move_by(1);
            EventResult::Continue
        }
        KeyCode::Char('j' | 'n') if ctrl => {
            list.move_by(1);
            EventResult::Continue
        }
        KeyCode::PageUp => {
            list.page(false);
            EventResult::Continue
        }
        KeyCode::PageDown => {
            list.page(true);
            EventResult::Continue
        }
        KeyCode::Home => {
            list.first();
            EventResult::Continue
        }
        KeyCode::End => {
            list.last();
            EventResult::Continue
        }

        KeyCode::Char('a') if ctrl => {
            query.home();
            EventResult::Continue
        }
        KeyCode::Char('e') if ctrl => {
            query.end();
            EventResult::Continue
        }
        KeyCode::Char('u') if ctrl => edited(query.clear()),
        KeyCode::Char('w') if ctrl => edited(query.delete_segment()),
        KeyCode::Char(_) if ctrl || alt => EventResult::Ignored,
        KeyCode::Char(c) => {
            query.insert(c);
            EventResult::QueryChanged
        }
        KeyCode::Backspace => edited(query.backspace()),
        KeyCode::Delete => edited(query.delete()),
        KeyCode::Left => {
            query.left();
            EventResult::Continue
        }
        KeyCode::Right => {
            query.right();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

fn on_mouse(state: &mut ViewState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => state.list.move_by(-1),
        MouseEventKind::ScrollDown => state.list.move_by(1),
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

/// Handle one terminal event
///
/// Only key presses and repeats count. Terminals that report releases
/// would otherwise type every character twice.
pub fn handle_event(state: &mut ViewState, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => EventResult::Ignored,
        Event::Key(key) => match state.mode {
            Mode::Normal => on_key(state, key),
            Mode::Help => {
                state.mode = Mode::Normal;
                EventResult::Continue
            }
        },
        Event::Mouse(mouse) => on_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Wait up to `timeout` for an event and handle it
///
/// # Errors
///
/// Returns an error if reading from the terminal fails.
pub fn poll_and_handle(state: &mut ViewState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }
    Ok(handle_event(state, event::read()?))
}
