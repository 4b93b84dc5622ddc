//! QuerySessionManager struct and synchronous state steps.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::model::Turn;
use crate::session::{SessionHandle, SessionObserver};
use crate::KnowledgeClient;

use super::state::ConversationState;

/// Owns one conversation: pending input, in-flight flag, history and the
/// last error. All mutation goes through its methods.
pub struct QuerySessionManager {
    pub(super) client: Arc<dyn KnowledgeClient>,
    pub(super) sessions: SessionHandle,
    pub(super) state: watch::Sender<ConversationState>,
    default_filter: Option<String>,
}

impl QuerySessionManager {
    pub fn new(client: Arc<dyn KnowledgeClient>, sessions: SessionHandle) -> Self {
        let (state, _) = watch::channel(ConversationState::default());
        Self {
            client,
            sessions,
            state,
            default_filter: None,
        }
    }

    /// Department filter applied at start and restored by `reset()`.
    pub fn with_department_filter(mut self, department: Option<String>) -> Self {
        self.default_filter = normalize_filter(department.as_deref());
        let filter = self.default_filter.clone();
        self.state.send_modify(|state| state.department_filter = filter);
        self
    }

    /// Store raw input text. Allowed at any time, including while a
    /// request is in flight.
    pub fn set_pending_input(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_modify(|state| state.pending_input = text);
    }

    /// Set or clear (`None` or blank) the department filter for later
    /// dispatches.
    pub fn set_department_filter(&self, department: Option<&str>) {
        let filter = normalize_filter(department);
        debug!(filter = ?filter, "department filter changed");
        self.state
            .send_modify(|state| state.department_filter = filter);
    }

    /// Clear history, pending input and error; return to idle. A request
    /// still in transit will be discarded when it resolves.
    pub fn reset(&self) {
        let filter = self.default_filter.clone();
        self.state.send_modify(|state| {
            *state = state.next_generation(filter);
            debug!(generation = state.generation, "conversation reset");
        });
    }

    /// Receiver that sees every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ConversationState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ConversationState {
        self.state.borrow().clone()
    }

    pub fn history(&self) -> Vec<Turn> {
        self.state.borrow().history.clone()
    }

    pub fn pending_input(&self) -> String {
        self.state.borrow().pending_input.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.borrow().last_error.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.borrow().in_flight
    }
}

impl SessionObserver for QuerySessionManager {
    fn session_ended(&self) {
        self.reset();
    }
}

fn normalize_filter(department: Option<&str>) -> Option<String> {
    department
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
