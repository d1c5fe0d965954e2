//! Panel listing the characters picked so far

use super::suggestion_list::character_row;
use crate::search::Selection;
use crate::ui::ratatui_adapter::state::ListCursor;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Shown while nothing is selected
pub const SELECTION_PLACEHOLDER: &str = "Select characters to see details.";

/// Selected-characters panel
///
/// Names are highlighted against the current query, like the suggestions.
pub struct SelectedPanel<'a> {
    selection: &'a Selection,
    query: &'a str,
    cursor: ListCursor,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SelectedPanel<'a> {
    /// Create a new selected panel widget
    #[must_use]
    pub const fn new(
        selection: &'a Selection,
        query: &'a str,
        cursor: ListCursor,
        theme: &'a Theme,
    ) -> Self {
        Self {
            selection,
            query,
            cursor,
            focused: false,
            theme,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SelectedPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Selected ({}) ", self.selection.len()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.selection.is_empty() {
            Paragraph::new(Line::styled(SELECTION_PLACEHOLDER, self.theme.dimmed_style()))
                .render(inner, buf);
            return;
        }

        let entries = self.selection.as_slice();
        let start = self.cursor.scroll_offset.min(entries.len());
        let end = (start + inner.height as usize).min(entries.len());

        let items: Vec<ListItem> = entries[start..end]
            .iter()
            .enumerate()
            .map(|(offset, character)| {
                let is_cursor = self.focused && start + offset == self.cursor.cursor;
                character_row(character, self.query, is_cursor, self.theme)
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
