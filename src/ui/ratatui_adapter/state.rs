//! Application state for the ratatui TUI
//!
//! Wraps the [`SearchSession`] with everything that only matters on screen:
//! cursors, scroll offsets, focus, the areas rows were drawn in (for mouse
//! hit-testing) and transient status messages.

use crate::search::{FetchTicket, SearchSession};
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::widgets::KeyHint;
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

/// Which list receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Search results under the input
    #[default]
    Suggestions,
    /// Characters already picked
    Selected,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Cursor and scroll position of one list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Index of the highlighted row
    pub cursor: usize,
    /// Index of the first visible row
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Move up one row
    pub const fn up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move down one row within `len` rows
    pub const fn down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Keep the cursor inside `len` rows
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.cursor);
    }

    /// Adjust scroll offset to keep the cursor visible in `height` rows
    pub const fn adjust_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// Row index drawn at screen `row` inside `area`, if any
    #[must_use]
    pub fn row_at(&self, area: Rect, row: u16) -> Option<usize> {
        if row < area.y || row >= area.y + area.height {
            return None;
        }
        Some(self.scroll_offset + usize::from(row - area.y))
    }
}

/// Application state for the picker
#[derive(Debug)]
pub struct AppState {
    /// Query, results, request lifecycle and selection
    pub session: SearchSession,
    /// Cursor position within the query (character index)
    pub query_cursor: usize,
    /// Which list has focus
    pub focus: FocusPane,
    /// Position in the suggestion list
    pub suggestions: ListCursor,
    /// Position in the selected panel
    pub selected: ListCursor,
    /// Inner area of the suggestion list from the last frame
    pub suggestions_area: Rect,
    /// Inner area of the selected panel from the last frame
    pub selected_area: Rect,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Key hints for the bottom bar
    pub hints: Vec<KeyHint>,
    /// Whether the picker should exit
    pub should_exit: bool,
}

impl AppState {
    /// Create new application state around a session
    #[must_use]
    pub fn new(session: SearchSession, hints: Vec<KeyHint>) -> Self {
        let query_cursor = session.query().chars().count();
        Self {
            session,
            query_cursor,
            focus: FocusPane::Suggestions,
            suggestions: ListCursor::default(),
            selected: ListCursor::default(),
            suggestions_area: Rect::default(),
            selected_area: Rect::default(),
            messages: Vec::new(),
            message_ttl: Duration::from_secs(4),
            hints,
            should_exit: false,
        }
    }

    /// Current query text
    #[must_use]
    pub fn query(&self) -> &str {
        self.session.query()
    }

    fn byte_index(&self) -> usize {
        let query = self.session.query();
        query
            .char_indices()
            .nth(self.query_cursor)
            .map_or(query.len(), |(i, _)| i)
    }

    /// Hand an edited query to the session and reset list positions
    fn commit_query(&mut self, query: String) -> Option<FetchTicket> {
        let ticket = self.session.set_query(query);
        self.focus = FocusPane::Suggestions;
        self.suggestions = ListCursor::default();
        ticket
    }

    /// Insert a character at the cursor
    pub fn query_push(&mut self, c: char) -> Option<FetchTicket> {
        let mut query = self.session.query().to_string();
        query.insert(self.byte_index(), c);
        self.query_cursor += 1;
        self.commit_query(query)
    }

    /// Delete the character before the cursor
    pub fn query_backspace(&mut self) -> Option<FetchTicket> {
        if self.query_cursor == 0 {
            return None;
        }
        let byte_idx = self.byte_index();
        let mut query = self.session.query().to_string();
        let prev = query[..byte_idx]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        query.remove(prev);
        self.query_cursor -= 1;
        self.commit_query(query)
    }

    /// Delete the character at the cursor
    pub fn query_delete(&mut self) -> Option<FetchTicket> {
        let byte_idx = self.byte_index();
        let mut query = self.session.query().to_string();
        if byte_idx >= query.len() {
            return None;
        }
        query.remove(byte_idx);
        self.commit_query(query)
    }

    /// Delete the word before the cursor
    pub fn query_delete_word(&mut self) -> Option<FetchTicket> {
        let byte_idx = self.byte_index();
        let mut query = self.session.query().to_string();
        let trimmed = query[..byte_idx].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |i| i + 1);
        query.drain(start..byte_idx);
        self.query_cursor = query[..start].chars().count();
        self.commit_query(query)
    }

    /// Clear the query
    pub fn query_clear(&mut self) -> Option<FetchTicket> {
        self.query_cursor = 0;
        self.commit_query(String::new())
    }

    /// Move the query cursor left
    pub const fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor -= 1;
        }
    }

    /// Move the query cursor right
    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.session.query().chars().count() {
            self.query_cursor += 1;
        }
    }

    /// Move the query cursor to the start
    pub const fn query_cursor_home(&mut self) {
        self.query_cursor = 0;
    }

    /// Move the query cursor to the end
    pub fn query_cursor_end(&mut self) {
        self.query_cursor = self.session.query().chars().count();
    }

    /// Switch focus between the two lists
    pub const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Suggestions => FocusPane::Selected,
            FocusPane::Selected => FocusPane::Suggestions,
        };
    }

    /// Move the focused list's cursor up
    pub fn cursor_up(&mut self) {
        match self.focus {
            FocusPane::Suggestions => self.suggestions.up(),
            FocusPane::Selected => self.selected.up(),
        }
    }

    /// Move the focused list's cursor down
    pub fn cursor_down(&mut self) {
        match self.focus {
            FocusPane::Suggestions => self.suggestions.down(self.session.results().len()),
            FocusPane::Selected => self.selected.down(self.session.selection().len()),
        }
    }

    /// Select the suggestion at `index`
    ///
    /// Returns `false` if there is no such suggestion.
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        let Some(character) = self.session.results().get(index).cloned() else {
            return false;
        };
        let name = character.name.clone();
        self.session.select(character);
        self.query_cursor = 0;
        self.suggestions = ListCursor::default();
        self.push_message(MessageLevel::Success, format!("Selected {name}"));
        true
    }

    /// Remove the selected entry at `index` (and every entry sharing its id)
    ///
    /// Returns `false` if there is no such entry.
    pub fn remove_selected(&mut self, index: usize) -> bool {
        let Some(character) = self.session.selection().get(index).cloned() else {
            return false;
        };
        let removed = self.session.remove(&character);
        self.selected.clamp(self.session.selection().len());
        let text = if removed > 1 {
            format!("Removed {} ({removed} entries)", character.name)
        } else {
            format!("Removed {}", character.name)
        };
        self.push_message(MessageLevel::Info, text);
        true
    }

    /// Act on the row under the focused cursor
    pub fn activate(&mut self) -> bool {
        match self.focus {
            FocusPane::Suggestions => self.select_suggestion(self.suggestions.cursor),
            FocusPane::Selected => self.remove_selected(self.selected.cursor),
        }
    }

    /// Act on the row drawn at screen position (`column`, `row`)
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        if self.suggestions_area.contains(position) {
            if let Some(index) = self.suggestions.row_at(self.suggestions_area, row) {
                return self.select_suggestion(index);
            }
        } else if self.selected_area.contains(position)
            && let Some(index) = self.selected.row_at(self.selected_area, row)
        {
            self.focus = FocusPane::Selected;
            return self.remove_selected(index);
        }
        false
    }

    /// Keep cursors valid after the result list or selection changed
    pub fn sync_cursors(&mut self) {
        self.suggestions.clamp(self.session.results().len());
        self.selected.clamp(self.session.selection().len());
    }

    /// Add a status message
    pub fn push_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Messages that have not expired yet
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Drop expired messages
    pub fn prune_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }
}
