//! Ratatui widgets for the picker TUI

mod help_bar;
mod search_bar;
mod selected_panel;
mod status_bar;
mod suggestion_list;

pub use help_bar::{HelpBar, KeyHint};
pub use search_bar::{SEARCH_PLACEHOLDER, SearchBar};
pub use selected_panel::{SELECTION_PLACEHOLDER, SelectedPanel};
pub use status_bar::{LOADING_TEXT, StatusBar};
pub use suggestion_list::SuggestionList;
