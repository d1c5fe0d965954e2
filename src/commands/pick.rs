//! Pick command - interactive multi-select picker

use crate::{
    CharpickError,
    api::HttpCharacterSource,
    config::CharpickConfig,
    search::{Fetcher, SearchSession, Selection},
    ui::{OutputWriter, RatatuiPicker, output},
};
use std::sync::Arc;

type Result<T> = std::result::Result<T, CharpickError>;

/// Execute the pick command
///
/// Runs the picker until the user leaves, then prints the selection.
///
/// # Errors
/// Returns an error if the runtime, HTTP client or terminal cannot be set up,
/// or if the selection cannot be printed
pub fn execute(
    config: &CharpickConfig,
    initial_query: Option<&str>,
    writer: &dyn OutputWriter,
) -> Result<Selection> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let source = HttpCharacterSource::new(config.endpoint.as_str())?;
    let mut fetcher = Fetcher::new(Arc::new(source), runtime.handle().clone());

    let mut session = SearchSession::new(config.stale_responses);
    if let Some(query) = initial_query
        && let Some(ticket) = session.set_query(query)
    {
        fetcher.dispatch(ticket);
    }

    let picker = RatatuiPicker::new().with_mouse(config.mouse);
    let selection = picker.run(session, &mut fetcher)?;

    // In-flight lookups have nobody left to answer to.
    runtime.shutdown_background();

    tracing::info!(selected = selection.len(), "picker closed");
    print_selection(writer, &selection, config)?;
    Ok(selection)
}

/// Print the final selection in the configured format
///
/// # Errors
/// Returns an error if JSON output cannot be produced
pub fn print_selection(
    writer: &dyn OutputWriter,
    selection: &Selection,
    config: &CharpickConfig,
) -> Result<()> {
    if selection.is_empty() {
        writer.info("No characters selected");
        return Ok(());
    }
    output::print_characters(writer, selection.as_slice(), "", config.output_format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Character;
    use crate::config::OutputFormat;
    use crate::ui::{BufferWriter, MessageLevel};

    fn selection() -> Selection {
        let mut selection = Selection::new();
        selection.push(Character::new(1, "Rick Sanchez", "r", vec!["e1".into()]));
        selection.push(Character::new(2, "Morty Smith", "m", Vec::new()));
        selection
    }

    #[test]
    fn test_print_empty_selection() {
        let writer = BufferWriter::new();
        print_selection(&writer, &Selection::new(), &CharpickConfig::default()).unwrap();
        assert_eq!(
            writer.lines(),
            vec![(MessageLevel::Info, "No characters selected".to_string())]
        );
    }

    #[test]
    fn test_print_selection_text() {
        colored::control::set_override(false);
        let writer = BufferWriter::new();
        print_selection(&writer, &selection(), &CharpickConfig::default()).unwrap();

        let lines: Vec<String> = writer.lines().into_iter().map(|(_, l)| l).collect();
        assert_eq!(
            lines,
            vec![
                "#1 Rick Sanchez (Episodes: 1)".to_string(),
                "#2 Morty Smith (Episodes: 0)".to_string(),
            ]
        );
    }

    #[test]
    fn test_print_selection_json() {
        let writer = BufferWriter::new();
        let config = CharpickConfig {
            output_format: OutputFormat::Json,
            ..CharpickConfig::default()
        };
        print_selection(&writer, &selection(), &config).unwrap();

        let lines = writer.lines();
        assert_eq!(lines.len(), 1);
        let parsed: Vec<Character> = serde_json::from_str(&lines[0].1).unwrap();
        assert_eq!(parsed, selection().into_vec());
    }
}
