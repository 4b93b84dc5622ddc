//! Error taxonomy for the query-session core.

/// Contract violations of the session layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("no active session")]
    NoActiveSession,
}

/// A login or search request that did not produce a usable payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    #[error("parse error: {0}")]
    Parse(String),
}

impl RequestError {
    /// Server-supplied `detail`, if the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            RequestError::Api {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => Some(detail),
            _ => None,
        }
    }

    /// Message for the user: the server detail, else `fallback`.
    pub fn display_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RequestError::Timeout
        } else if e.is_decode() {
            RequestError::Parse(e.to_string())
        } else {
            RequestError::Network(e.to_string())
        }
    }
}

/// Failure of `SessionHolder::login`.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// The server answered but the payload cannot form a session.
    #[error(transparent)]
    Identity(#[from] SessionError),

    /// The login request itself failed; `message` is ready for display.
    #[error("{message}")]
    Request {
        message: String,
        #[source]
        source: RequestError,
    },
}
