//! Status line: loading indicator, error banner and recent messages

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Text of the loading indicator
pub const LOADING_TEXT: &str = "Loading...";

/// Status line widget
///
/// The left side shows, in priority order, the loading indicator, the error
/// banner, or the latest message. The right side shows the selection count.
pub struct StatusBar<'a> {
    loading: bool,
    error: Option<&'a str>,
    messages: &'a [&'a StatusMessage],
    selected_count: usize,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(messages: &'a [&'a StatusMessage], theme: &'a Theme) -> Self {
        Self {
            loading: false,
            error: None,
            messages,
            selected_count: 0,
            theme,
        }
    }

    /// Show the loading indicator
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Show an error banner
    #[must_use]
    pub const fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Number of selected entries
    #[must_use]
    pub const fn selected_count(mut self, count: usize) -> Self {
        self.selected_count = count;
        self
    }

    fn style_for_level(&self, level: MessageLevel) -> ratatui::style::Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    fn left_line(&self) -> Line<'a> {
        if self.loading {
            return Line::from(Span::styled(LOADING_TEXT, self.theme.info_style()));
        }
        if let Some(error) = self.error {
            return Line::from(vec![
                Span::styled("Error: ", self.theme.error_style()),
                Span::styled(error, self.theme.error_style()),
            ]);
        }
        self.messages.last().map_or_else(Line::default, |msg| {
            Line::from(Span::styled(msg.text.as_str(), self.style_for_level(msg.level)))
        })
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(16)])
            .split(area);

        Paragraph::new(self.left_line()).render(chunks[0], buf);

        let count = Line::styled(
            format!("{} selected", self.selected_count),
            self.theme.dimmed_style(),
        )
        .right_aligned();
        Paragraph::new(count).render(chunks[1], buf);
    }
}
