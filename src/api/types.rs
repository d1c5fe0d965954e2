//! Wire types for the character-search endpoint

use serde::{Deserialize, Serialize};

/// One character record as returned by the search API
///
/// Only the fields the picker renders are kept; anything else in the
/// response body is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// API-assigned identifier, unique per character
    pub id: u64,
    /// Display name
    pub name: String,
    /// Avatar URL
    pub image: String,
    /// URLs of the episodes the character appears in
    #[serde(default)]
    pub episode: Vec<String>,
}

impl Character {
    /// Create a new character record
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        image: impl Into<String>,
        episode: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            episode,
        }
    }

    /// Number of episodes the character appears in
    #[must_use]
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}

/// Raw response body
///
/// The endpoint answers either `{ "results": [...] }` or `{ "error": "..." }`.
/// Nothing beyond the presence of `error` is validated.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<Character>>,
}
