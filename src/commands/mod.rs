//! Command implementations
//!
//! Each command is a module with an `execute` function that takes the
//! effective configuration plus its parsed CLI args.

pub mod config;
pub mod pick;
pub mod search;

// Re-export execute functions for convenience
pub use config::execute as config;
pub use pick::execute as pick;
pub use search::execute as search;
