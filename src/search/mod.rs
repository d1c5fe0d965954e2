//! Search-as-you-type core
//!
//! UI-agnostic pieces of the picker:
//!
//! - **`SearchSession`** - query, results, request lifecycle and selection
//! - **`Fetcher`** - runs issued lookups on a tokio runtime
//! - **`Selection`** - ordered list of chosen characters
//! - **`highlight`** - splits a name around the query match

mod fetcher;
mod highlight;
mod selection;
mod state;

pub use fetcher::Fetcher;
pub use highlight::{Highlighted, find_case_insensitive, highlight};
pub use selection::Selection;
pub use state::{
    ApplyOutcome, FetchCompletion, FetchTicket, RequestStatus, SearchSession, StalePolicy,
};
