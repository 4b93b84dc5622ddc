//! Async submit: dispatch, await the search, apply the outcome.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{RequestError, SessionError};
use crate::model::{SearchPayload, SearchRequest, Turn};
use crate::session::Session;
use crate::SEARCH_FAILED;

use super::guard::InFlightGuard;
use super::manager::QuerySessionManager;
use super::state::{SearchOutcome, Submission};

/// What was captured at dispatch time.
struct Ticket {
    query: String,
    session: Arc<Session>,
    generation: u64,
    department_filter: Option<String>,
}

enum Dispatch {
    Blank,
    NoSession,
    Busy,
    Sent(Ticket),
}

impl QuerySessionManager {
    /// Ask a question.
    ///
    /// The query is `text` when it is non-blank after trimming, otherwise
    /// the trimmed pending input. A blank query, or a call while another
    /// request is in flight, changes nothing. Otherwise the pending input
    /// is cleared, the request is sent with the current session's token,
    /// and its outcome is applied once it resolves, unless the
    /// conversation was reset or the session changed in the meantime.
    pub async fn submit(&self, text: Option<&str>) -> Result<Submission, SessionError> {
        let ticket = match self.dispatch(text) {
            Dispatch::Blank => {
                debug!("blank query ignored");
                return Ok(Submission::Blank);
            }
            Dispatch::NoSession => {
                warn!("search attempted without an active session");
                return Err(SessionError::NoActiveSession);
            }
            Dispatch::Busy => {
                debug!("search already in flight, submission ignored");
                return Ok(Submission::Busy);
            }
            Dispatch::Sent(ticket) => ticket,
        };

        let guard = InFlightGuard::new(self, ticket.generation);
        let request = SearchRequest {
            query: ticket.query.clone(),
            department_filter: ticket.department_filter.clone(),
        };
        debug!(
            session = %ticket.session.id(),
            query_len = request.query.len(),
            filter = ?request.department_filter,
            "search dispatched"
        );

        let result = self.client.search(ticket.session.token(), &request).await;
        guard.disarm();

        Ok(self.resolve(ticket, result))
    }

    /// Idle -> Awaiting, atomically with the blank/session/busy checks.
    fn dispatch(&self, text: Option<&str>) -> Dispatch {
        let mut decision = Dispatch::Blank;
        self.state.send_if_modified(|state| {
            let Some(query) = effective_query(text, &state.pending_input) else {
                return false;
            };
            let Some(session) = self.sessions.current() else {
                decision = Dispatch::NoSession;
                return false;
            };
            if state.in_flight {
                decision = Dispatch::Busy;
                return false;
            }

            state.in_flight = true;
            state.last_error = None;
            state.pending_input.clear();
            decision = Dispatch::Sent(Ticket {
                query,
                session,
                generation: state.generation,
                department_filter: state.department_filter.clone(),
            });
            true
        });
        decision
    }

    /// Awaiting -> Idle, appending a turn or recording the error.
    fn resolve(
        &self,
        ticket: Ticket,
        result: Result<SearchPayload, RequestError>,
    ) -> Submission {
        let outcome = match result {
            Ok(payload) => SearchOutcome::Success(Turn::new(ticket.query.as_str(), payload)),
            Err(e) => {
                warn!(error = %e, "search failed");
                SearchOutcome::Failure(e.display_message(SEARCH_FAILED))
            }
        };

        let mut applied = false;
        self.state.send_if_modified(|state| {
            if state.generation != ticket.generation {
                return false;
            }
            // Same generation, other session: the in-flight flag is still ours.
            if !self.same_session(&ticket) {
                state.in_flight = false;
                return true;
            }
            state.in_flight = false;
            match &outcome {
                SearchOutcome::Success(turn) => state.history.push(turn.clone()),
                SearchOutcome::Failure(message) => state.last_error = Some(message.clone()),
            }
            applied = true;
            true
        });

        if !applied {
            warn!(
                session = %ticket.session.id(),
                "discarding response for a reset conversation"
            );
            return Submission::Discarded;
        }
        if let SearchOutcome::Success(turn) = &outcome {
            debug!(
                latency_ms = turn.latency_ms(),
                citations = turn.citations().len(),
                "turn appended"
            );
        }
        Submission::Completed(outcome)
    }

    /// True while the session `ticket` was dispatched under is still active.
    fn same_session(&self, ticket: &Ticket) -> bool {
        self.sessions
            .current()
            .is_some_and(|s| s.id() == ticket.session.id())
    }
}

fn effective_query(text: Option<&str>, pending_input: &str) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .or_else(|| Some(pending_input.trim()).filter(|p| !p.is_empty()))
        .map(str::to_string)
}
