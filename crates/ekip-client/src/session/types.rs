//! Session value, read handle, and observer seam.

use std::fmt;
use std::sync::Arc;

use ekip_common::SessionId;
use tokio::sync::watch;

use crate::error::SessionError;
use crate::model::Identity;

/// Authenticated identity. Immutable once created.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    token: String,
    user_id: String,
    email: Option<String>,
    department: String,
    roles: Vec<String>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("department", &self.department)
            .field("roles", &self.roles)
            .finish()
    }
}

impl Session {
    /// Validate a login payload.
    ///
    /// `token`, `user_id` and at least one role are required; blank strings
    /// count as missing. Roles keep server order with duplicates removed.
    pub fn from_identity(identity: Identity) -> Result<Self, SessionError> {
        let token = required(identity.token, "token")?;
        let user_id = required(identity.user_id, "user_id")?;

        let mut roles: Vec<String> = Vec::new();
        for role in identity.roles.unwrap_or_default() {
            let role = role.trim();
            if !role.is_empty() && !roles.iter().any(|r| r == role) {
                roles.push(role.to_string());
            }
        }
        if roles.is_empty() {
            return Err(SessionError::InvalidIdentity(
                "identity grants no roles".into(),
            ));
        }

        Ok(Self {
            id: SessionId::new(),
            token,
            user_id,
            email: identity.email.filter(|e| !e.trim().is_empty()),
            department: identity.department.unwrap_or_default(),
            roles,
        })
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, SessionError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SessionError::InvalidIdentity(format!("{field} is missing"))),
    }
}

/// Read-only view of the holder's current session.
#[derive(Clone)]
pub struct SessionHandle(pub(super) watch::Receiver<Option<Arc<Session>>>);

impl SessionHandle {
    pub fn current(&self) -> Option<Arc<Session>> {
        self.0.borrow().clone()
    }
}

/// Notified synchronously when the current session ends.
pub trait SessionObserver: Send + Sync {
    fn session_ended(&self);
}
