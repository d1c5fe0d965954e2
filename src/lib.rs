//! Charpick - a terminal multi-select autocomplete for Rick and Morty characters
//!
//! The library holds the search-as-you-type data flow independent of any
//! front end: a [`search::SearchSession`] owns the query, the request status
//! and the selection, a [`search::Fetcher`] runs lookups against an
//! [`api::CharacterSource`], and [`search::highlight`] marks the matched part
//! of a name. The ratatui picker in [`ui`] drives all three.

use thiserror::Error;

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod search;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CharpickError {
    /// A character lookup failed
    #[error("{0}")]
    Fetch(#[from] api::FetchError),
    /// Terminal or output error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CharpickError {
    /// Process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Fetch(_) => 1,
            Self::InvalidInput(_) => 2,
            Self::Ui(_) | Self::ConfigError(_) | Self::IoError(_) => 3,
        }
    }
}
