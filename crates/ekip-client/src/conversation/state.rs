//! Observable conversation state and submission outcomes.

use serde::Serialize;

use crate::model::Turn;

/// Whether a request is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Awaiting,
}

/// Snapshot published to observers after every state step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversationState {
    /// Answered turns, oldest first. Append-only.
    pub history: Vec<Turn>,
    /// Text typed but not yet submitted.
    pub pending_input: String,
    pub in_flight: bool,
    /// Message of the most recent failed search, cleared by the next dispatch.
    pub last_error: Option<String>,
    /// Sent as `department_filter` with the next dispatch.
    pub department_filter: Option<String>,
    /// Bumped by every reset; requests remember the value they were
    /// dispatched under.
    pub generation: u64,
}

impl ConversationState {
    /// Fresh state for the generation after `self`, keeping only the filter.
    pub(crate) fn next_generation(&self, department_filter: Option<String>) -> Self {
        Self {
            department_filter,
            generation: self.generation + 1,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight {
            Phase::Awaiting
        } else {
            Phase::Idle
        }
    }
}

/// How a resolved request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The turn appended to history.
    Success(Turn),
    /// The message stored in `last_error`.
    Failure(String),
}

/// Result of one `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Nothing to ask; no request was sent.
    Blank,
    /// Another request is in flight; no request was sent.
    Busy,
    /// The request resolved and its outcome was applied.
    Completed(SearchOutcome),
    /// The request resolved after the conversation was reset or the
    /// session changed; its outcome was dropped.
    Discarded,
}
