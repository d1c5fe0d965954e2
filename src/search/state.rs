//! Search session state
//!
//! [`SearchSession`] owns the query, the current result list, the request
//! lifecycle and the selection. It never performs I/O: changing the query
//! hands back a [`FetchTicket`] for the caller to dispatch, and the resolved
//! [`FetchCompletion`] is fed back through [`SearchSession::apply`].

use super::selection::Selection;
use crate::api::{Character, FetchError};
use serde::{Deserialize, Serialize};

/// What to do with a completion that is no longer the latest request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StalePolicy {
    /// Drop completions whose sequence number is not the latest issued
    #[default]
    Discard,
    /// Apply every completion in arrival order (last response wins)
    Apply,
}

/// Lifecycle of the most recently applied request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// No search is active
    #[default]
    Idle,
    /// A request was issued and has not been answered
    Loading {
        /// Sequence number of the outstanding request
        seq: u64,
    },
    /// The request answered with results
    Loaded {
        /// Sequence number of the answered request
        seq: u64,
    },
    /// The request failed
    Failed {
        /// Sequence number of the failed request
        seq: u64,
        /// What went wrong
        error: FetchError,
    },
}

/// One issued lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Strictly increasing per session, starting at 1
    pub seq: u64,
    /// Query text exactly as typed
    pub query: String,
}

/// One resolved lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    /// Sequence number of the ticket this answers
    pub seq: u64,
    /// Query the ticket was issued for
    pub query: String,
    /// Characters found, or why the lookup failed
    pub outcome: Result<Vec<Character>, FetchError>,
}

impl FetchCompletion {
    /// Pair a ticket with its outcome
    #[must_use]
    pub fn new(ticket: FetchTicket, outcome: Result<Vec<Character>, FetchError>) -> Self {
        Self {
            seq: ticket.seq,
            query: ticket.query,
            outcome,
        }
    }
}

/// Result of feeding a completion into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The completion changed the session state
    Applied,
    /// The completion was stale and ignored
    Discarded,
}

/// Query, results, request lifecycle and selection for one picker
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    query: String,
    results: Vec<Character>,
    status: RequestStatus,
    selection: Selection,
    policy: StalePolicy,
    last_issued: u64,
    /// Ticket whose query is still the current one; `None` once cleared
    active: Option<u64>,
}

impl SearchSession {
    /// Create an empty session
    #[must_use]
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Replace the query text
    ///
    /// Returns a ticket when the text changed and is non-blank. A blank query
    /// clears the results and returns the session to `Idle` without issuing
    /// anything. Setting the same text again is not a change.
    pub fn set_query(&mut self, text: impl Into<String>) -> Option<FetchTicket> {
        let text = text.into();
        if text == self.query {
            return None;
        }
        self.query = text;

        if self.query.trim().is_empty() {
            self.results.clear();
            self.status = RequestStatus::Idle;
            self.active = None;
            return None;
        }

        self.last_issued += 1;
        let seq = self.last_issued;
        self.active = Some(seq);
        self.status = RequestStatus::Loading { seq };
        tracing::debug!(seq, query = %self.query, "issuing character lookup");

        Some(FetchTicket {
            seq,
            query: self.query.clone(),
        })
    }

    /// Feed a resolved lookup back into the session
    pub fn apply(&mut self, completion: FetchCompletion) -> ApplyOutcome {
        let FetchCompletion {
            seq,
            query,
            outcome,
        } = completion;

        let stale = match self.policy {
            StalePolicy::Discard => self.active != Some(seq),
            // A blank query shows nothing, whichever answer arrives.
            StalePolicy::Apply => self.active.is_none(),
        };
        if stale {
            tracing::debug!(seq, %query, latest = self.last_issued, "discarding stale lookup");
            return ApplyOutcome::Discarded;
        }

        match outcome {
            Ok(results) => {
                tracing::debug!(seq, %query, count = results.len(), "lookup returned results");
                self.results = results;
                self.status = RequestStatus::Loaded { seq };
            }
            Err(error) => {
                tracing::info!(seq, %query, %error, "lookup failed");
                self.status = RequestStatus::Failed { seq, error };
            }
        }

        ApplyOutcome::Applied
    }

    /// Add a character to the selection and clear the query
    pub fn select(&mut self, character: Character) {
        tracing::debug!(id = character.id, name = %character.name, "selected character");
        self.selection.push(character);
        // A blank query never issues a ticket.
        let _ = self.set_query(String::new());
    }

    /// Remove every selected entry sharing `character`'s id
    pub fn remove(&mut self, character: &Character) -> usize {
        let removed = self.selection.remove_id(character.id);
        tracing::debug!(id = character.id, removed, "removed character from selection");
        removed
    }

    /// Current query text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Characters from the last applied successful lookup
    #[must_use]
    pub fn results(&self) -> &[Character] {
        &self.results
    }

    /// Request lifecycle
    #[must_use]
    pub const fn status(&self) -> &RequestStatus {
        &self.status
    }

    /// Whether a lookup is outstanding
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, RequestStatus::Loading { .. })
    }

    /// Message to show for the last failure, if the last request failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Failed { error, .. } => Some(error.user_message()),
            _ => None,
        }
    }

    /// Chosen characters
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Stale-response policy in effect
    #[must_use]
    pub const fn policy(&self) -> StalePolicy {
        self.policy
    }

    /// Sequence number of the most recently issued ticket (0 if none)
    #[must_use]
    pub const fn last_issued(&self) -> u64 {
        self.last_issued
    }

    /// Consume the session, keeping only the selection
    #[must_use]
    pub fn into_selection(self) -> Selection {
        self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GENERIC_FETCH_ERROR;

    fn character(id: u64, name: &str) -> Character {
        Character::new(id, name, format!("https://example.test/{id}.jpeg"), vec![])
    }

    #[test]
    fn test_non_empty_query_issues_one_ticket() {
        let mut session = SearchSession::new(StalePolicy::Discard);

        let ticket = session.set_query("rick").unwrap();
        assert_eq!(ticket, FetchTicket { seq: 1, query: "rick".into() });
        assert!(session.is_loading());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_same_query_is_not_a_change() {
        let mut session = SearchSession::new(StalePolicy::Discard);
        assert!(session.set_query("rick").is_some());
        assert!(session.set_query("rick").is_none());
        assert_eq!(session.last_issued(), 1);
    }

    #[test]
    fn test_query_is_sent_untrimmed() {
        let mut session = SearchSession::new(StalePolicy::Discard);
        let ticket = session.set_query(" rick ").unwrap();
        assert_eq!(ticket.query, " rick ");
    }

    #[test]
    fn test_blank_query_clears_results_without_ticket() {
        let mut session = SearchSession::new(StalePolicy::Discard);
        let ticket = session.set_query("morty").unwrap();
        session.apply(FetchCompletion::new(ticket, Ok(vec![character(2, "Morty Smith")])));
        assert_eq!(session.results().len(), 1);

        assert!(session.set_query("   ").is_none());
        assert!(session.results().is_empty());
        assert_eq!(session.status(), &RequestStatus::Idle);

        assert!(session.set_query("").is_none());
        assert!(session.results().is_empty());
    }

    #[test]
    fn test_results_replace_previous() {
        let mut session = SearchSession::new(StalePolicy::Discard);
        let ticket = session.set_query("smith").unwrap();
        let outcome = session.apply(FetchCompletion::new(
            ticket,
            Ok(vec![character(2, "Morty Smith"), character(3, "Summer Smith")]),
        ));

        assert_eq!(outcome, ApplyOutcome::Applied);
        let names: Vec<&str> = session.results().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Morty Smith", "Summer Smith"]);
        assert!(session.error().is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_api_error_keeps_results() {
        let mut session = SearchSession::new(StalePolicy::Discard);
        let ticket = session.set_query("rick").unwrap();
        session.apply(FetchCompletion::new(ticket, Ok(vec![character(1, "Rick Sanchez")])));

        let ticket = session.set_query("rickx").unwrap();
        session.apply(FetchCompletion::new(
            ticket,
            Err(FetchError::ApiReported("There is nothing here".into())),
        ));

        assert_eq!(session.error(), Some("There is nothing here"));
        assert_eq!(session.results().len(), 1);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_transport_error_is_generic() {
        let mut session = SearchSession::new(StalePolicy::Discard);
        let ticket = session.set_query("rick").unwrap();
        session.apply(FetchCompletion::new(
            ticket,
            Err(FetchError::Transport("dns failure".into())),
        ));

        assert_eq!(session.error(), Some(GENERIC_FETCH_ERROR));
    }

    #[test]
    fn test_new_query_clears_error() {
        let mut session = SearchSession::new(StalePolicy::Discard);
        let ticket = session.set_query("x").unwrap();
        session.apply(FetchCompletion::new(ticket, Err(FetchError::Parse("bad".into()))));
        assert!(session.error().is_some());

        session.set_query("xy");
        assert!(session.error().is_none());
        assert!(session.is_loading());
    }

    #[test]
    fn test_discard_policy_drops_stale_completion() {
        let mut session = SearchSession::new(StalePolicy::Discard);
        let first = session.set_query("r").unwrap();
        let second = session.set_query("ri").unwrap();

        let outcome = session.apply(FetchCompletion::new(first, Ok(vec![character(9, "Stale")])));
        assert_eq!(outcome, ApplyOutcome::Discarded);
        assert!(session.results().is_empty());
        assert_eq!(session.status(), &RequestStatus::Loading { seq: second.seq });

        session.apply(FetchCompletion::new(second, Ok(vec![character(1, "Rick Sanchez")])));
        assert_eq!(session.results()[0].id, 1);
    }

    #[test]
    fn test_discard_policy_drops_completion_after_clear() {
        let mut session = SearchSession::new(StalePolicy::Discard);
        let ticket = session.set_query("rick").unwrap();
        session.set_query("");

        let outcome = session.apply(FetchCompletion::new(ticket, Ok(vec![character(1, "Rick")])));
        assert_eq!(outcome, ApplyOutcome::Discarded);
        assert!(session.results().is_empty());
    }

    #[test]
    fn test_apply_policy_last_arrival_wins() {
        let mut session = SearchSession::new(StalePolicy::Apply);
        let first = session.set_query("r").unwrap();
        let second = session.set_query("ri").unwrap();

        session.apply(FetchCompletion::new(second, Ok(vec![character(1, "Rick Sanchez")])));
        let outcome = session.apply(FetchCompletion::new(first, Ok(vec![character(9, "Stale")])));

        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(session.results()[0].id, 9);
        assert_eq!(session.status(), &RequestStatus::Loaded { seq: 1 });
    }

    #[test]
    fn test_blank_query_hides_previous_error() {
        let mut session = SearchSession::new(StalePolicy::Discard);
        let ticket = session.set_query("zzz").unwrap();
        session.apply(FetchCompletion::new(
            ticket,
            Err(FetchError::ApiReported("There is nothing here".into())),
        ));
        assert_eq!(session.error(), Some("There is nothing here"));

        session.set_query("");
        assert_eq!(session.error(), None);
        assert_eq!(session.status(), &RequestStatus::Idle);
    }

    #[test]
    fn test_apply_policy_drops_completion_after_clear() {
        let mut session = SearchSession::new(StalePolicy::Apply);
        let ticket = session.set_query("rick").unwrap();
        session.set_query("");

        let outcome = session.apply(FetchCompletion::new(ticket, Ok(vec![character(1, "Rick")])));
        assert_eq!(outcome, ApplyOutcome::Discarded);
        assert_eq!(session.query(), "");
        assert!(session.results().is_empty());
        assert_eq!(session.status(), &RequestStatus::Idle);
    }

    #[test]
    fn test_apply_policy_stale_answer_ends_loading() {
        let mut session = SearchSession::new(StalePolicy::Apply);
        let first = session.set_query("r").unwrap();
        session.set_query("ri").unwrap();

        session.apply(FetchCompletion::new(first, Ok(vec![])));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_select_twice_then_remove() {
        let mut session = SearchSession::new(StalePolicy::Discard);
        let rick = character(1, "Rick Sanchez");

        session.select(rick.clone());
        session.select(rick.clone());
        assert_eq!(session.selection().len(), 2);

        assert_eq!(session.remove(&rick), 2);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_select_resets_query() {
        let mut session = SearchSession::new(StalePolicy::Discard);
        let ticket = session.set_query("morty").unwrap();
        session.apply(FetchCompletion::new(ticket, Ok(vec![character(2, "Morty Smith")])));

        let morty = session.results()[0].clone();
        session.select(morty);

        assert_eq!(session.query(), "");
        assert!(session.results().is_empty());
        assert_eq!(session.last_issued(), 1);
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let mut session = SearchSession::new(StalePolicy::Discard);
        let seqs: Vec<u64> = ["a", "ab", "", "abc"]
            .iter()
            .filter_map(|q| session.set_query(*q))
            .map(|t| t.seq)
            .collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }
}
