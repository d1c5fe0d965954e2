//! Ratatui-based picker adapter
//!
//! Terminal front end for the search session, built on ratatui for
//! rendering and crossterm for input.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              RatatuiPicker                  │
//! │      (event loop, terminal lifecycle)       │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  Fetcher   │ │  Ratatui  │ │ Crossterm │
//! │  (tokio)   │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod events;
mod picker;
mod state;
mod theme;
pub mod widgets;

pub use events::{EventResult, handle_key, poll_and_handle};
pub use picker::RatatuiPicker;
pub use state::{AppState, FocusPane, ListCursor, StatusMessage};
pub use theme::Theme;
