//! Fetch error types
//!
//! A lookup can fail in exactly two ways:
//!
//! - **`ApiReported`**: the body itself carries an `error` field. The message
//!   is shown to the user verbatim.
//! - **`Transport`** / **`Parse`**: the request never produced a usable body.
//!   The user sees [`GENERIC_FETCH_ERROR`]; the cause is kept for logging.
//!
//! Neither is fatal; the session stays interactive and nothing is retried.

use thiserror::Error;

/// Message shown for any transport or parse failure
pub const GENERIC_FETCH_ERROR: &str = "An error occurred while fetching characters.";

/// Errors produced by a character lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The API answered with an `error` field
    #[error("{0}")]
    ApiReported(String),

    /// The request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    Transport(String),

    /// The body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Parse(String),
}

impl FetchError {
    /// Message to display to the user
    ///
    /// API-reported errors pass through unchanged; every other failure
    /// collapses to [`GENERIC_FETCH_ERROR`].
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::ApiReported(message) => message,
            Self::Transport(_) | Self::Parse(_) => GENERIC_FETCH_ERROR,
        }
    }

    /// Whether the error came from the API body rather than the transport
    #[must_use]
    pub const fn is_api_reported(&self) -> bool {
        matches!(self, Self::ApiReported(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
