//! Output abstraction layer
//!
//! Line-oriented output for the one-shot commands and for printing the
//! selection once the picker exits.

use super::error::Result;
use crate::api::Character;
use crate::config::OutputFormat;
use crate::search::{Highlighted, highlight};
use colored::Colorize;
use std::sync::{Arc, Mutex};

/// Trait for output operations
///
/// # Examples
///
/// ```
/// use charpick::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("Rick Sanchez");
/// output.error("There is nothing here");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Suppress info messages
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message.dimmed());
        }
    }
}

/// Writer that records lines in memory
///
/// Used by tests and by callers that want the output as data.
#[derive(Clone, Default)]
pub struct BufferWriter {
    lines: Arc<Mutex<Vec<(MessageLevel, String)>>>,
}

impl BufferWriter {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines with their level
    #[must_use]
    pub fn lines(&self) -> Vec<(MessageLevel, String)> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, message.to_string()));
        }
    }
}

impl OutputWriter for BufferWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Info message
    Info,
}

/// Render a name with the query match emphasised
#[must_use]
pub fn emphasise(name: &str, query: &str) -> String {
    match highlight(name, query) {
        Highlighted::Plain(text) => text.to_string(),
        Highlighted::Match {
            before,
            matched,
            after,
        } => format!("{before}{}{after}", matched.bold().underline()),
    }
}

/// One result line: `#id name (Episodes: N)`
#[must_use]
pub fn character_line(character: &Character, query: &str) -> String {
    format!(
        "#{} {} {}",
        character.id,
        emphasise(&character.name, query),
        format!("(Episodes: {})", character.episode_count()).dimmed()
    )
}

/// Print characters in the requested format
///
/// # Errors
///
/// Returns `UiError::SerializeError` if JSON output cannot be produced.
pub fn print_characters(
    writer: &dyn OutputWriter,
    characters: &[Character],
    query: &str,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for character in characters {
                writer.write(&character_line(character, query));
            }
        }
        OutputFormat::Json => {
            writer.write(&serde_json::to_string_pretty(characters)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rick() -> Character {
        Character::new(1, "Rick Sanchez", "r", vec!["e1".into(), "e2".into()])
    }

    #[test]
    fn test_character_line_plain() {
        colored::control::set_override(false);
        assert_eq!(character_line(&rick(), ""), "#1 Rick Sanchez (Episodes: 2)");
    }

    #[test]
    fn test_emphasise_keeps_text() {
        colored::control::set_override(false);
        assert_eq!(emphasise("Rick Sanchez", "ick"), "Rick Sanchez");
    }

    #[test]
    fn test_print_json() {
        let writer = BufferWriter::new();
        print_characters(&writer, &[rick()], "", OutputFormat::Json).unwrap();

        let lines = writer.lines();
        assert_eq!(lines.len(), 1);
        let parsed: Vec<Character> = serde_json::from_str(&lines[0].1).unwrap();
        assert_eq!(parsed, vec![rick()]);
    }

    #[test]
    fn test_print_text_one_line_each() {
        let writer = BufferWriter::new();
        let morty = Character::new(2, "Morty Smith", "m", vec![]);
        print_characters(&writer, &[rick(), morty], "", OutputFormat::Text).unwrap();

        let lines = writer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|(level, _)| *level == MessageLevel::Normal));
    }

    #[test]
    fn test_buffer_writer_levels() {
        let writer = BufferWriter::new();
        writer.error("boom");
        writer.info("hint");

        let levels: Vec<MessageLevel> = writer.lines().into_iter().map(|(l, _)| l).collect();
        assert_eq!(levels, vec![MessageLevel::Error, MessageLevel::Info]);
    }
}
