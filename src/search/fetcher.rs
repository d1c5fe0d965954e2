//! Background execution of lookups
//!
//! Each ticket becomes one tokio task. Tasks are never cancelled; when one
//! finishes it sends its [`FetchCompletion`] over a channel that the event
//! loop drains between frames, so session state is only ever touched from
//! the loop's thread.

use super::state::{ApplyOutcome, FetchCompletion, FetchTicket, SearchSession};
use crate::api::CharacterSource;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};

/// Runs lookups for issued tickets and collects their completions
pub struct Fetcher {
    source: Arc<dyn CharacterSource>,
    runtime: Handle,
    tx: UnboundedSender<FetchCompletion>,
    rx: UnboundedReceiver<FetchCompletion>,
    pending: usize,
}

impl Fetcher {
    /// Create a fetcher spawning onto `runtime`
    #[must_use]
    pub fn new(source: Arc<dyn CharacterSource>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            runtime,
            tx,
            rx,
            pending: 0,
        }
    }

    /// Start the lookup for `ticket`
    pub fn dispatch(&mut self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.pending += 1;

        self.runtime.spawn(async move {
            let outcome = source.search(&ticket.query).await;
            // The receiver only goes away when the picker is shutting down.
            let _ = tx.send(FetchCompletion::new(ticket, outcome));
        });
    }

    /// Take one finished lookup without waiting
    pub fn try_next(&mut self) -> Option<FetchCompletion> {
        match self.rx.try_recv() {
            Ok(completion) => {
                self.pending = self.pending.saturating_sub(1);
                Some(completion)
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Wait for the next finished lookup
    pub async fn next(&mut self) -> Option<FetchCompletion> {
        let completion = self.rx.recv().await?;
        self.pending = self.pending.saturating_sub(1);
        Some(completion)
    }

    /// Apply every finished lookup to `session`
    ///
    /// Returns how many completions changed the session.
    pub fn drain_into(&mut self, session: &mut SearchSession) -> usize {
        let mut applied = 0;
        while let Some(completion) = self.try_next() {
            if session.apply(completion) == ApplyOutcome::Applied {
                applied += 1;
            }
        }
        applied
    }

    /// Number of dispatched lookups not yet collected
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.pending
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
