//! Help overlay widget listing every picker key

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn heading(&self, text: &'static str) -> Line<'static> {
        Line::styled(text, self.theme.marker.add_modifier(Modifier::UNDERLINED))
    }

    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<14}"), self.theme.marker),
            Span::raw(desc),
        ])
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            self.heading("  Navigation"),
            Line::default(),
            self.help_line("  ↑/↓ TAB", "Move cursor"),
            self.help_line("  Ctrl+N/P", "Move cursor"),
            self.help_line("  PgUp/PgDn", "Page up/down"),
            self.help_line("  Home/End", "Jump to best/last match"),
            self.help_line("  Enter", "Go to folder"),
            self.help_line("  ESC", "Dismiss"),
            Line::default(),
            self.heading("  Search"),
            Line::default(),
            self.help_line("  Type", "Fuzzy filter folders"),
            self.help_line("  Ctrl+U", "Clear query"),
            self.help_line("  Ctrl+W", "Delete path segment"),
            self.help_line("  Ctrl+A/E", "Query start/end"),
            self.help_line("  ←/→", "Move cursor in query"),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.dimmed),
            Line::default(),
        ]
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 70, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.marker)
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content()).block(block).render(popup_area, buf);
    }
}
