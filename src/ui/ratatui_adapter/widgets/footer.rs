//! Footer line: notice or key hints on the left, match counter on the right

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const KEYS: [(&str, &str); 4] = [
    ("↑/↓", "move"),
    ("Enter", "go to folder"),
    ("Esc", "dismiss"),
    ("F1", "help"),
];

/// What the left side of the footer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterText<'a> {
    /// Default key hints
    Keys,
    /// Roots are still being walked
    Busy(&'a str),
    /// A transient warning
    Notice(&'a str),
}

/// Picker footer widget
pub struct Footer<'a> {
    text: FooterText<'a>,
    visible: usize,
    total: usize,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    #[must_use]
    pub const fn new(text: FooterText<'a>, visible: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            text,
            visible,
            total,
            theme,
        }
    }

    fn left(&self) -> Line<'a> {
        match self.text {
            FooterText::Keys => {
                let mut spans = Vec::with_capacity(KEYS.len() * 3);
                for (key, action) in KEYS {
                    if !spans.is_empty() {
                        spans.push(Span::raw("  "));
                    }
                    spans.push(Span::styled(key, self.theme.marker));
                    spans.push(Span::styled(" ", self.theme.dimmed));
                    spans.push(Span::styled(action, self.theme.dimmed));
                }
                Line::from(spans)
            }
            FooterText::Busy(text) => Line::styled(text, self.theme.dimmed),
            FooterText::Notice(text) => Line::from(vec![
                Span::styled("⚠ ", self.theme.warning),
                Span::styled(text, self.theme.warning),
            ]),
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(12)]).areas(inner);

        Paragraph::new(self.left()).render(left, buf);

        if !matches!(self.text, FooterText::Busy(_)) {
            Paragraph::new(Line::styled(
                format!("{}/{}", self.visible, self.total),
                self.theme.dimmed,
            ))
            .alignment(Alignment::Right)
            .render(right, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(footer: Footer<'_>) -> String {
        let area = Rect::new(0, 0, 70, 3);
        let mut buf = Buffer::empty(area);
        footer.render(area, &mut buf);
        buf.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_keys_and_counter() {
        let theme = Theme::default();
        let text = render_to_string(Footer::new(FooterText::Keys, 2, 7, &theme));

        assert!(text.contains("go to folder"));
        assert!(text.contains("2/7"));
    }

    #[test]
    fn test_notice_replaces_keys() {
        let theme = Theme::default();
        let text = render_to_string(Footer::new(
            FooterText::Notice("No matching folders"),
            0,
            7,
            &theme,
        ));

        assert!(text.contains("No matching folders"));
        assert!(!text.contains("go to folder"));
        assert!(text.contains("0/7"));
    }

    #[test]
    fn test_busy_hides_counter() {
        let theme = Theme::default();
        let text = render_to_string(Footer::new(
            FooterText::Busy("Loading folders..."),
            0,
            0,
            &theme,
        ));

        assert!(text.contains("Loading folders..."));
        assert!(!text.contains("0/0"));
    }
}
