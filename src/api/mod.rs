//! Character-search API access
//!
//! Wire types, the [`CharacterSource`] abstraction and its HTTP
//! implementation.

mod client;
pub mod error;
mod types;

pub use client::{CharacterSource, DEFAULT_ENDPOINT, HttpCharacterSource, endpoint_url, parse_body};
pub use error::{FetchError, GENERIC_FETCH_ERROR};
pub use types::Character;
