//! Knowledge-search server connection settings.

use serde::{Deserialize, Serialize};

/// Default API root, matching the development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Where and how the client talks to the search service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// API root; `/auth/login` and `/search` are appended to it.
    pub base_url: String,
    /// TCP connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
