//! Tracing setup
//!
//! The interactive picker owns the terminal, so it only logs when a log file
//! is given. One-shot commands log to stderr. Filtering follows `RUST_LOG`,
//! defaulting to `charpick=info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "charpick=info";

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Discard all events
    Off,
    /// Write to standard error
    Stderr,
    /// Append to a file
    File(&'a Path),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// Calling this more than once keeps the first subscriber.
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be opened.
pub fn init(target: LogTarget<'_>) -> std::io::Result<()> {
    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_target_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charpick.log");

        init(LogTarget::File(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("charpick.log");

        assert!(init(LogTarget::File(&path)).is_err());
    }
}
