//! Config command - print the effective configuration

use crate::{CharpickError, config::CharpickConfig, ui::OutputWriter};

type Result<T> = std::result::Result<T, CharpickError>;

/// Execute the config command
///
/// # Errors
/// Returns an error if the configuration cannot be serialized
pub fn execute(config: &CharpickConfig, writer: &dyn OutputWriter) -> Result<()> {
    writer.write(config.to_toml()?.trim_end());
    Ok(())
}
