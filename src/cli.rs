//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **pick**: interactive picker (default), prints the selection on exit
//! - **search**: one-shot lookup printed to stdout
//! - **config**: print the effective configuration
//!
//! Global flags override the config file and `CHARPICK_*` environment
//! variables; see [`Cli::apply_overrides`].

use crate::config::{CharpickConfig, OutputFormat};
use crate::search::StalePolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "charpick")]
#[command(author, version, about = "Search Rick and Morty characters and collect a selection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the character-search endpoint
    #[arg(long = "endpoint", value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// What to do with answers to superseded lookups
    #[arg(long = "stale", value_enum, global = true)]
    pub stale: Option<StalePolicy>,

    /// Output format for printed characters
    #[arg(long = "format", value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Do not capture the mouse in the picker
    #[arg(long = "no-mouse", global = true)]
    pub no_mouse: bool,

    /// Append log output to this file
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive picker (default)
    #[command(visible_alias = "p")]
    Pick {
        /// Start with this query already typed
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },

    /// Look up characters by name and print them
    #[command(visible_alias = "s")]
    Search {
        /// Name (or part of one) to search for
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Pick if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Pick { query: None })
    }

    /// Apply flag overrides on top of a loaded configuration
    pub fn apply_overrides(&self, config: &mut CharpickConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(stale) = self.stale {
            config.stale_responses = stale;
        }
        if let Some(format) = self.format {
            config.output_format = format;
        }
        if self.no_mouse {
            config.mouse = false;
        }
    }
}
