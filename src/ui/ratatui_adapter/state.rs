//! View state for the ratatui picker
//!
//! The ranked list lives in the picker session. What remains here is the
//! editable query line, the cursor over the visible rows, and the single
//! transient notice shown in the status bar.

use std::time::{Duration, Instant};

/// How long a notice stays in the status bar
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Which layer receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Query editing and list movement
    #[default]
    Normal,
    /// Help overlay is open; any key closes it
    Help,
}

/// How the picker loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Go to the folder under the cursor
    Accept,
    /// Close without choosing
    Dismiss,
}

/// Editable single-line query with a byte-offset caret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryLine {
    text: String,
    caret: usize,
}

impl QueryLine {
    /// Query text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position as a byte offset into the text
    #[must_use]
    pub const fn caret(&self) -> usize {
        self.caret
    }

    /// Insert `c` at the caret
    pub fn insert(&mut self, c: char) {
        self.text.insert(self.caret, c);
        self.caret += c.len_utf8();
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.caret]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.caret..]
            .chars()
            .next()
            .map_or(self.caret, |c| self.caret + c.len_utf8())
    }

    /// Remove the character before the caret; false when there is none
    pub fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let start = self.prev_boundary();
        self.text.replace_range(start..self.caret, "");
        self.caret = start;
        true
    }

    /// Remove the character under the caret; false when there is none
    pub fn delete(&mut self) -> bool {
        let end = self.next_boundary();
        if end == self.caret {
            return false;
        }
        self.text.replace_range(self.caret..end, "");
        true
    }

    /// Remove back to the previous "/" or space; false when nothing changed
    pub fn delete_segment(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let head = self.text[..self.caret].trim_end_matches(['/', ' ']);
        let start = head.rfind(['/', ' ']).map_or(0, |i| i + 1);
        self.text.replace_range(start..self.caret, "");
        self.caret = start;
        true
    }

    /// Empty the query; false when it already was
    pub fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        self.caret = 0;
        true
    }

    /// Move the caret one character left
    pub fn left(&mut self) {
        self.caret = self.prev_boundary();
    }

    /// Move the caret one character right
    pub fn right(&mut self) {
        self.caret = self.next_boundary();
    }

    /// Move the caret to the start
    pub fn home(&mut self) {
        self.caret = 0;
    }

    /// Move the caret past the last character
    pub fn end(&mut self) {
        self.caret = self.text.len();
    }
}

/// Cursor over the visible rows, with the scroll window that follows it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Highlighted row
    pub selected: usize,
    /// First row drawn
    pub offset: usize,
    /// Rows that fit on screen (updated on every draw)
    pub height: usize,
    /// Rows the session currently shows
    pub len: usize,
}

impl ListCursor {
    /// Move by `delta` rows, clamped to the list
    pub fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let last = self.len - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
        self.follow();
    }

    /// Move by one screenful; `down` picks the direction
    pub fn page(&mut self, down: bool) {
        let step = isize::try_from(self.height.max(1)).unwrap_or(isize::MAX);
        self.move_by(if down { step } else { -step });
    }

    /// Jump to the best match
    pub fn first(&mut self) {
        self.selected = 0;
        self.follow();
    }

    /// Jump to the last visible row
    pub fn last(&mut self) {
        self.selected = self.len.saturating_sub(1);
        self.follow();
    }

    /// Start over on a freshly ranked list of `len` rows
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.selected = 0;
        self.offset = 0;
    }

    fn follow(&mut self) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.height > 0 && self.selected >= self.offset + self.height {
            self.offset = self.selected + 1 - self.height;
        }
    }
}

/// A short-lived status line message
#[derive(Debug, Clone)]
pub struct Notice {
    /// Message text
    pub text: String,
    shown_at: Instant,
}

/// Everything the picker loop mutates between frames
#[derive(Debug, Default)]
pub struct ViewState {
    /// Query being typed
    pub query: QueryLine,
    /// Position in the visible list
    pub list: ListCursor,
    /// Active input layer
    pub mode: Mode,
    /// Set once the loop should stop
    pub exit: Option<Exit>,
    notice: Option<Notice>,
}

impl ViewState {
    /// Create state for a list of `len` visible rows
    #[must_use]
    pub fn new(len: usize) -> Self {
        let mut state = Self::default();
        state.list.reset(len);
        state
    }

    /// Show `text` in the status bar until it expires
    pub fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            shown_at: Instant::now(),
        });
    }

    /// Current notice, if it has not expired
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|n| n.shown_at.elapsed() <= NOTICE_TTL)
    }

    /// Drop an expired notice
    pub fn expire_notice(&mut self) {
        if self.notice().is_none() {
            self.notice = None;
        }
    }
}
