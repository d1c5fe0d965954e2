//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events onto [`AppState`] operations. Edits to the
//! query may hand back a ticket that the caller must dispatch.

use super::state::{AppState, FocusPane};
use crate::search::FetchTicket;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// The query changed to a searchable value; dispatch this ticket
    Search(FetchTicket),
    /// Leave the picker
    Exit,
    /// No action taken
    Ignored,
}

impl From<Option<FetchTicket>> for EventResult {
    fn from(ticket: Option<FetchTicket>) -> Self {
        ticket.map_or(Self::Continue, Self::Search)
    }
}

/// Handle a key press
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            EventResult::Exit
        }

        // Select / remove
        (KeyCode::Enter, _) => {
            if state.activate() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Delete, _) if state.focus == FocusPane::Selected => {
            if state.activate() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }

        // Navigation
        (KeyCode::Tab | KeyCode::BackTab, _) => {
            state.toggle_focus();
            EventResult::Continue
        }
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => state.query_clear().into(),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => state.query_delete_word().into(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c).into()
        }
        (KeyCode::Backspace, _) => state.query_backspace().into(),
        (KeyCode::Delete, _) => state.query_delete().into(),
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.query_cursor_home();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.query_cursor_end();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if state.click(mouse.column, mouse.row) {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
