//! In-flight guard for dispatched requests.

use tracing::warn;

use super::manager::QuerySessionManager;

/// Returns the conversation to idle if a dispatched request is dropped
/// before it resolves (the `submit` future was cancelled).
pub(crate) struct InFlightGuard<'a> {
    manager: &'a QuerySessionManager,
    generation: u64,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    pub(crate) fn new(manager: &'a QuerySessionManager, generation: u64) -> Self {
        Self {
            manager,
            generation,
            armed: true,
        }
    }

    /// The request resolved; its outcome handles the state.
    pub(crate) fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let generation = self.generation;
        let manager = self.manager;
        manager.state.send_if_modified(|state| {
            if state.generation != generation || !state.in_flight {
                return false;
            }
            warn!("search abandoned before it resolved");
            state.in_flight = false;
            true
        });
    }
}
