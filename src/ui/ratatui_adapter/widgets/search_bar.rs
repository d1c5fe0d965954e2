//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown while the query is empty
pub const SEARCH_PLACEHOLDER: &str = "Search characters...";

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query (character index)
    cursor: usize,
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
            theme,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style())
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));

        let spans = if self.query.is_empty() {
            vec![
                caret,
                Span::styled(SEARCH_PLACEHOLDER, self.theme.dimmed_style()),
            ]
        } else {
            let split = self
                .query
                .char_indices()
                .nth(self.cursor)
                .map_or(self.query.len(), |(i, _)| i);
            let (before, after) = self.query.split_at(split);
            vec![Span::raw(before), caret, Span::raw(after)]
        };

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
