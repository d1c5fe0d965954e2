//! Ratatui-based picker implementation
//!
//! Owns the terminal for the lifetime of one picking session. Each loop
//! iteration drains finished lookups into the session, draws a frame and
//! handles at most one input event.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, FocusPane};
use super::theme::Theme;
use super::widgets::{HelpBar, SearchBar, SelectedPanel, StatusBar, SuggestionList};
use crate::search::{Fetcher, SearchSession, Selection};
use crate::ui::error::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Margin, Rect},
};
use std::io::{self, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Screen regions of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameLayout {
    pub search: Rect,
    pub status: Rect,
    pub suggestions: Rect,
    pub selected: Rect,
    pub help: Rect,
}

impl FrameLayout {
    pub(crate) fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Search bar
                Constraint::Length(1),      // Loading / error line
                Constraint::Percentage(60), // Suggestions
                Constraint::Min(4),         // Selected characters
                Constraint::Length(1),      // Help bar
            ])
            .split(area);

        Self {
            search: chunks[0],
            status: chunks[1],
            suggestions: chunks[2],
            selected: chunks[3],
            help: chunks[4],
        }
    }
}

/// Ratatui-based picker
pub struct RatatuiPicker {
    theme: Theme,
    mouse: bool,
}

impl RatatuiPicker {
    /// Create a new picker with mouse support enabled
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            mouse: true,
        }
    }

    /// Enable or disable mouse capture
    #[must_use]
    pub const fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if self.mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal(&self) -> Result<()> {
        if self.mouse {
            execute!(io::stdout(), DisableMouseCapture)?;
        }
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Draw one frame
    pub(crate) fn render(&self, frame: &mut Frame, state: &mut AppState) {
        let layout = FrameLayout::new(frame.area());
        let theme = &self.theme;

        // Remember where rows go so clicks can be mapped back to entries.
        state.suggestions_area = layout.suggestions.inner(Margin::new(1, 1));
        state.selected_area = layout.selected.inner(Margin::new(1, 1));
        state
            .suggestions
            .adjust_scroll(state.suggestions_area.height as usize);
        state
            .selected
            .adjust_scroll(state.selected_area.height as usize);

        let query = state.session.query();

        frame.render_widget(SearchBar::new(query, state.query_cursor, theme), layout.search);

        let messages = state.active_messages();
        let status = StatusBar::new(&messages, theme)
            .loading(state.session.is_loading())
            .error(state.session.error())
            .selected_count(state.session.selection().len());
        frame.render_widget(status, layout.status);

        let suggestions = SuggestionList::new(state.session.results(), query, state.suggestions, theme)
            .focused(state.focus == FocusPane::Suggestions);
        frame.render_widget(suggestions, layout.suggestions);

        let selected = SelectedPanel::new(state.session.selection(), query, state.selected, theme)
            .focused(state.focus == FocusPane::Selected);
        frame.render_widget(selected, layout.selected);

        frame.render_widget(HelpBar::new(&state.hints, theme), layout.help);
    }

    /// Run the picker event loop
    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut AppState,
        fetcher: &mut Fetcher,
    ) -> Result<()> {
        loop {
            if fetcher.drain_into(&mut state.session) > 0 {
                state.sync_cursors();
            }
            state.prune_messages();

            terminal.draw(|frame| self.render(frame, state))?;

            match poll_and_handle(state, POLL_INTERVAL)? {
                EventResult::Search(ticket) => fetcher.dispatch(ticket),
                EventResult::Exit => break,
                EventResult::Continue | EventResult::Ignored => {}
            }
            state.sync_cursors();

            if state.should_exit {
                break;
            }
        }
        Ok(())
    }

    /// Run an interactive session and return what was picked
    ///
    /// Lookups still in flight when the user leaves are left to finish on
    /// their own; their answers are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up or drawn to.
    pub fn run(&self, session: SearchSession, fetcher: &mut Fetcher) -> Result<Selection> {
        let mut state = AppState::new(session, HelpBar::default_hints());

        let mut terminal = self.setup_terminal()?;
        let result = self.run_loop(&mut terminal, &mut state, fetcher);

        // Cleanup terminal (always, even on error)
        if let Err(e) = self.cleanup_terminal() {
            tracing::warn!(error = %e, "terminal cleanup failed");
        }

        result.map(|()| state.session.into_selection())
    }
}

impl Default for RatatuiPicker {
    fn default() -> Self {
        Self::new()
    }
}
