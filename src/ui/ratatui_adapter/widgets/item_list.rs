//! Item list widget for displaying ranked folders

use crate::fuzzy;
use crate::picker::PickerSession;
use crate::ui::ratatui_adapter::state::ListCursor;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::types::DisplayItem;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Item list widget showing the session's visible folders
///
/// Each row is the folder label followed by its dimmed description, with the
/// characters the query matched highlighted in the description.
pub struct ItemList<'a> {
    session: &'a PickerSession,
    list: &'a ListCursor,
    theme: &'a Theme,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub const fn new(session: &'a PickerSession, list: &'a ListCursor, theme: &'a Theme) -> Self {
        Self {
            session,
            list,
            theme,
        }
    }

    /// Split `text` into spans, styling the characters at `positions`
    fn highlight(text: &str, positions: &[usize], base: Style, matched: Style) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_matched = false;

        for (i, c) in text.chars().enumerate() {
            let is_match = positions.binary_search(&i).is_ok();
            if is_match != run_matched && !run.is_empty() {
                let style = if run_matched { matched } else { base };
                spans.push(Span::styled(std::mem::take(&mut run), style));
            }
            run_matched = is_match;
            run.push(c);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, if run_matched { matched } else { base }));
        }

        spans
    }

    fn render_item(&self, item: &DisplayItem, is_cursor: bool) -> ListItem<'static> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let label_style = if is_cursor {
            self.theme.selected
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.marker),
            Span::raw(" "),
            Span::styled(item.label.clone(), label_style),
            Span::raw("  "),
        ];

        let positions =
            fuzzy::matched_positions(self.session.query(), &item.description).unwrap_or_default();
        spans.extend(Self::highlight(
            &item.description,
            &positions,
            self.theme.description,
            self.theme.matched,
        ));

        let line = Line::from(spans);
        if is_cursor {
            ListItem::new(line).style(self.theme.selected)
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " Folders ({}/{}) ",
            self.session.visible_len(),
            self.session.total()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let start = self.list.offset;
        let end = (start + inner.height as usize).min(self.session.visible_len());

        let items: Vec<ListItem> = (start..end)
            .filter_map(|visible_idx| {
                let item = self.session.visible_item(visible_idx)?;
                Some(self.render_item(item, visible_idx == self.list.selected))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
