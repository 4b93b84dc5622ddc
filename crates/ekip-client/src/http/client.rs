//! HTTP client struct, endpoint building, and response decoding.

use std::time::Duration;

use ekip_config::schema::ServerConfig;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::RequestError;

pub(crate) const LOGIN_PATH: &str = "auth/login";
pub(crate) const SEARCH_PATH: &str = "search";

/// Knowledge-search API client.
pub struct HttpKnowledgeClient {
    pub(crate) base_url: String,
    pub(crate) http: reqwest::Client,
}

impl HttpKnowledgeClient {
    pub fn new(config: &ServerConfig) -> Result<Self, RequestError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs.into()))
            .timeout(Duration::from_secs(config.request_timeout_secs.into()))
            .build()
            .map_err(|e| RequestError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Turn a response into `T`, or into `RequestError::Api` carrying the
    /// server's `detail` for non-2xx statuses.
    pub(crate) async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, RequestError> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = extract_detail(&body);
            debug!(status = status.as_u16(), detail = ?detail, "request rejected");
            return Err(RequestError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_slice(&body).map_err(|e| RequestError::Parse(e.to_string()))
    }
}

/// Pull a display message out of an error body.
///
/// Accepts `{"detail": "..."}` and the validation form
/// `{"detail": [{"msg": "..."}, ...]}`; anything else yields `None`.
pub(crate) fn extract_detail(body: &[u8]) -> Option<String> {
    let json: serde_json::Value = serde_json::from_slice(body).ok()?;
    let detail = match json.get("detail")? {
        serde_json::Value::String(s) => s.trim().to_string(),
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    (!detail.is_empty()).then_some(detail)
}
