//! Query-session core for the internal knowledge-search service.
//!
//! Provides:
//! - `SessionHolder`: the authenticated identity for one application run
//! - `QuerySessionManager`: single-flight question/answer conversation state
//! - `KnowledgeClient`: the login/search seam, with a reqwest implementation

pub mod conversation;
pub mod error;
pub mod http;
pub mod model;
pub mod session;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

pub use conversation::{ConversationState, Phase, QuerySessionManager, SearchOutcome, Submission};
pub use error::{LoginError, RequestError, SessionError};
pub use http::HttpKnowledgeClient;
pub use model::{Citation, Identity, SearchPayload, SearchRequest, Turn};
pub use session::{Session, SessionHandle, SessionHolder, SessionObserver};

/// Fallback shown when a failed login carries no server detail.
pub const LOGIN_FAILED: &str = "Login failed";
/// Fallback shown when a failed search carries no server detail.
pub const SEARCH_FAILED: &str = "Search failed";

/// Transport to the knowledge-search service.
///
/// Implementations own framing, headers and timeouts; callers only see
/// decoded payloads or a `RequestError`.
#[async_trait]
pub trait KnowledgeClient: Send + Sync {
    /// Exchange an email for an identity payload (`POST /auth/login`).
    async fn login(&self, email: &str) -> Result<Identity, RequestError>;

    /// Ask one question on behalf of `token` (`POST /search`).
    async fn search(
        &self,
        token: &str,
        request: &SearchRequest,
    ) -> Result<SearchPayload, RequestError>;
}
