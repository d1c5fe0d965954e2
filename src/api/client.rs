//! Character lookup over HTTP
//!
//! [`CharacterSource`] is the seam between the search session and the
//! network. [`HttpCharacterSource`] is the real implementation; tests plug in
//! in-memory sources instead.

use super::error::FetchError;
use super::types::{ApiResponse, Character};
use async_trait::async_trait;
use reqwest::Client;

/// Public character-search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/api/character/";

/// Something that can look characters up by name
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Run one lookup for `query`
    ///
    /// # Errors
    ///
    /// Returns `FetchError::ApiReported` when the body carries an `error`
    /// field, `Transport` or `Parse` when no usable body was received.
    async fn search(&self, query: &str) -> Result<Vec<Character>, FetchError>;
}

/// Build the lookup URL for `query`
///
/// The query is substituted verbatim; no percent-encoding is applied here.
#[must_use]
pub fn endpoint_url(endpoint: &str, query: &str) -> String {
    format!("{endpoint}?name={query}")
}

/// Interpret a response body
///
/// An `error` field wins over everything else. A body with neither `error`
/// nor `results` is treated as malformed.
///
/// # Errors
///
/// Returns `FetchError::Parse` for non-JSON bodies or bodies without
/// `results`, `FetchError::ApiReported` when the API reports an error.
pub fn parse_body(body: &str) -> Result<Vec<Character>, FetchError> {
    let response: ApiResponse = serde_json::from_str(body)?;

    if let Some(message) = response.error {
        return Err(FetchError::ApiReported(message));
    }

    response
        .results
        .ok_or_else(|| FetchError::Parse("response has neither `results` nor `error`".to_string()))
}

/// HTTP implementation backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpCharacterSource {
    client: Client,
    endpoint: String,
}

impl HttpCharacterSource {
    /// Create a source for the given endpoint
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Transport` if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The configured base endpoint
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CharacterSource for HttpCharacterSource {
    async fn search(&self, query: &str) -> Result<Vec<Character>, FetchError> {
        let url = endpoint_url(&self.endpoint, query);
        tracing::debug!(%url, "sending character lookup");

        // Status codes are not consulted: unknown names come back as 404
        // with an `error` body, which must surface verbatim.
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::trace!(%status, bytes = body.len(), "character lookup answered");

        parse_body(&body)
    }
}
