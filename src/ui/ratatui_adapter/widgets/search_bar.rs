//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query
    cursor: usize,
    /// Block title
    title: &'a str,
    /// Hint shown while the query is empty
    placeholder: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            title: "",
            placeholder: "",
            theme,
        }
    }

    /// Set the block title
    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Set the placeholder shown for an empty query
    #[must_use]
    pub const fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.title);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.marker)
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled(">", self.theme.marker), Span::raw(" ")];

        if self.query.is_empty() {
            spans.push(caret);
            spans.push(Span::styled(self.placeholder, self.theme.dimmed));
        } else {
            let (before, after) = self.query.split_at(self.cursor.min(self.query.len()));
            spans.push(Span::raw(before));
            spans.push(caret);
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
