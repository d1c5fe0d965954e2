//! Search command - one-shot character lookup

use crate::{
    CharpickError,
    api::{CharacterSource, HttpCharacterSource},
    config::{CharpickConfig, OutputFormat},
    ui::{OutputWriter, output},
};

type Result<T> = std::result::Result<T, CharpickError>;

/// Execute the search command
///
/// Returns the number of characters printed.
///
/// # Errors
/// Returns `CharpickError::InvalidInput` for a blank query and
/// `CharpickError::Fetch` if the lookup fails
pub fn execute(config: &CharpickConfig, query: &str, writer: &dyn OutputWriter) -> Result<usize> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let source = HttpCharacterSource::new(config.endpoint.as_str())?;

    runtime.block_on(run(&source, query, config.output_format, writer))
}

/// Look up `query` on `source` and print the results
///
/// # Errors
/// See [`execute`].
pub async fn run(
    source: &dyn CharacterSource,
    query: &str,
    format: OutputFormat,
    writer: &dyn OutputWriter,
) -> Result<usize> {
    if query.trim().is_empty() {
        return Err(CharpickError::InvalidInput("query must not be empty".into()));
    }

    match source.search(query).await {
        Ok(characters) => {
            tracing::info!(query, count = characters.len(), "lookup finished");
            if characters.is_empty() {
                writer.info("No characters found");
            }
            output::print_characters(writer, &characters, query, format)?;
            Ok(characters.len())
        }
        Err(err) => {
            tracing::warn!(query, error = %err, "lookup failed");
            Err(err.into())
        }
    }
}
