//! Suggestion list widget for search results

use crate::api::Character;
use crate::search::{Highlighted, highlight};
use crate::ui::ratatui_adapter::state::ListCursor;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Split a name into styled spans around the query match
pub(crate) fn name_spans<'a>(
    name: &'a str,
    query: &str,
    base: Style,
    matched_style: Style,
) -> Vec<Span<'a>> {
    match highlight(name, query) {
        Highlighted::Plain(text) => vec![Span::styled(text, base)],
        Highlighted::Match {
            before,
            matched,
            after,
        } => vec![
            Span::styled(before, base),
            Span::styled(matched, base.patch(matched_style)),
            Span::styled(after, base),
        ],
    }
}

/// One character row: cursor marker, highlighted name, episode count
pub(crate) fn character_row<'a>(
    character: &'a Character,
    query: &str,
    is_cursor: bool,
    theme: &Theme,
) -> ListItem<'a> {
    let cursor_char = if is_cursor { ">" } else { " " };
    let base = if is_cursor {
        theme.selected_style()
    } else {
        theme.normal_style()
    };

    let mut spans = vec![
        Span::styled(cursor_char, theme.cursor_style()),
        Span::raw(" "),
    ];
    spans.extend(name_spans(&character.name, query, base, theme.match_style()));
    spans.push(Span::styled(
        format!("  Episodes: {}", character.episode_count()),
        theme.dimmed_style(),
    ));

    ListItem::new(Line::from(spans))
}

/// Suggestion list widget
pub struct SuggestionList<'a> {
    results: &'a [Character],
    query: &'a str,
    cursor: ListCursor,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SuggestionList<'a> {
    /// Create a new suggestion list widget
    #[must_use]
    pub const fn new(
        results: &'a [Character],
        query: &'a str,
        cursor: ListCursor,
        theme: &'a Theme,
    ) -> Self {
        Self {
            results,
            query,
            cursor,
            focused: true,
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

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Characters ({}) ", self.results.len()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let start = self.cursor.scroll_offset.min(self.results.len());
        let end = (start + inner.height as usize).min(self.results.len());

        let items: Vec<ListItem> = self.results[start..end]
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

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_name_spans_split_on_match() {
        let spans = name_spans("Rick Sanchez", "ick", Style::default(), Style::default());
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["R", "ick", " Sanchez"]);
    }

    #[test]
    fn test_name_spans_plain_without_query() {
        let spans = name_spans("Morty Smith", "", Style::default(), Style::default());
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_renders_names_and_episode_counts() {
        let theme = Theme::default();
        let results = vec![
            Character::new(1, "Rick Sanchez", "r", vec!["e1".into(); 51]),
            Character::new(2, "Morty Smith", "m", vec!["e1".into(); 51]),
        ];
        let area = Rect::new(0, 0, 50, 5);
        let mut buf = Buffer::empty(area);

        SuggestionList::new(&results, "ick", ListCursor::default(), &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Characters (2)"));
        assert!(text.contains("> Rick Sanchez  Episodes: 51"));
        assert!(text.contains("Morty Smith"));
    }

    #[test]
    fn test_scroll_offset_skips_rows() {
        let theme = Theme::default();
        let results: Vec<Character> = (1..=6)
            .map(|i| Character::new(i, format!("Name {i}"), "x", vec![]))
            .collect();
        let cursor = ListCursor {
            cursor: 5,
            scroll_offset: 3,
        };
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        SuggestionList::new(&results, "", cursor, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(!text.contains("Name 3"));
        assert!(text.contains("Name 4"));
        assert!(text.contains("> Name 6"));
    }
}
