//! Styles used by the picker widgets

use ratatui::style::{Color, Modifier, Style};

/// Styles for each part of the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Row under the cursor
    pub selected: Style,
    /// Cursor marker and prompt
    pub marker: Style,
    /// Query characters found in a description
    pub matched: Style,
    /// Description column
    pub description: Style,
    /// Footer notices
    pub warning: Style,
    /// Block borders
    pub border: Style,
    /// Placeholders, hints and counters
    pub dimmed: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::new()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            marker: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            matched: Style::new()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD.union(Modifier::UNDERLINED)),
            description: Style::new().fg(Color::Gray),
            warning: Style::new().fg(Color::Yellow),
            border: Style::new().fg(Color::DarkGray),
            dimmed: Style::new().fg(Color::DarkGray),
        }
    }
}
