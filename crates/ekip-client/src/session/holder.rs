//! Owner of the current session.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::{LoginError, SessionError};
use crate::model::Identity;
use crate::{KnowledgeClient, LOGIN_FAILED};

use super::types::{Session, SessionHandle, SessionObserver};

/// Holds at most one `Session` and tells observers when it ends.
pub struct SessionHolder {
    current: watch::Sender<Option<Arc<Session>>>,
    observers: Vec<Arc<dyn SessionObserver>>,
}

impl SessionHolder {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self {
            current,
            observers: Vec::new(),
        }
    }

    /// Register an observer to be told about every `clear()`.
    pub fn register(&mut self, observer: Arc<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Read handle that always sees the current session.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle(self.current.subscribe())
    }

    pub fn current(&self) -> Option<Arc<Session>> {
        self.current.borrow().clone()
    }

    /// Validate `identity` and make it the current session.
    ///
    /// An already active session is cleared first, so observers reset
    /// before the new identity becomes visible to them.
    pub fn establish(&self, identity: Identity) -> Result<Arc<Session>, SessionError> {
        let session = Arc::new(Session::from_identity(identity)?);

        if self.current.borrow().is_some() {
            debug!("replacing active session");
            self.clear();
        }

        self.current.send_replace(Some(Arc::clone(&session)));
        info!(
            session = %session.id(),
            user = %session.user_id(),
            department = %session.department(),
            roles = ?session.roles(),
            "session established"
        );
        Ok(session)
    }

    /// Log in through `client` and establish the returned identity.
    pub async fn login(
        &self,
        client: &dyn KnowledgeClient,
        email: &str,
    ) -> Result<Arc<Session>, LoginError> {
        let email = email.trim();
        debug!(email, "login request");

        let identity = client.login(email).await.map_err(|source| {
            warn!(email, error = %source, "login failed");
            LoginError::Request {
                message: source.display_message(LOGIN_FAILED),
                source,
            }
        })?;

        Ok(self.establish(identity)?)
    }

    /// Discard the session and reset every observer. Idempotent.
    pub fn clear(&self) {
        if let Some(previous) = self.current.send_replace(None) {
            info!(session = %previous.id(), "session cleared");
        }
        for observer in &self.observers {
            observer.session_ended();
        }
    }
}

impl Default for SessionHolder {
    fn default() -> Self {
        Self::new()
    }
}
