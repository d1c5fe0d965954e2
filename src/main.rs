//! Charpick CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Open the picker (default command), optionally with a query typed in
//! charpick
//! charpick pick rick
//!
//! # One-shot lookup
//! charpick search morty
//! charpick --format json search "Smith"
//!
//! # Show the effective configuration
//! charpick config
//!
//! # Keep answers to superseded lookups, log to a file
//! charpick --stale apply --log-file /tmp/charpick.log
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/charpick/config.toml` on Linux) and can be overridden with
//! `CHARPICK_*` environment variables or the global flags.

use charpick::{
    CharpickError,
    cli::{Cli, Commands},
    commands,
    config::CharpickConfig,
    logging::{self, LogTarget},
    ui::{OutputWriter, StdoutWriter},
};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, CharpickError>;

fn load_config(cli: &Cli) -> Result<CharpickConfig> {
    let mut config = match &cli.config {
        Some(path) => CharpickConfig::load_from(path)?,
        None => CharpickConfig::load()?,
    };
    cli.apply_overrides(&mut config);
    Ok(config)
}

fn log_target<'a>(cli: &'a Cli, command: &Commands) -> LogTarget<'a> {
    match (&cli.log_file, command) {
        (Some(path), _) => LogTarget::File(path),
        // The picker owns the terminal.
        (None, Commands::Pick { .. }) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    }
}

fn run(cli: &Cli, writer: &dyn OutputWriter) -> Result<()> {
    let command = cli.get_command();
    logging::init(log_target(cli, &command))?;

    let config = load_config(cli)?;
    tracing::debug!(endpoint = %config.endpoint, stale = ?config.stale_responses, "configuration loaded");

    match &command {
        Commands::Pick { query } => {
            commands::pick(&config, query.as_deref(), writer)?;
        }
        Commands::Search { query } => {
            commands::search(&config, query, writer)?;
        }
        Commands::Config => {
            commands::config(&config, writer)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let writer = StdoutWriter::new().quiet(cli.quiet);

    match run(&cli, &writer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                CharpickError::Fetch(fetch) => writer.error(fetch.user_message()),
                other => writer.error(&other.to_string()),
            }
            u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
        }
    }
}
