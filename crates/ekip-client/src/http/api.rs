//! KnowledgeClient trait implementation for HttpKnowledgeClient.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::error::RequestError;
use crate::model::{Identity, SearchPayload, SearchRequest};
use crate::KnowledgeClient;

use super::client::{HttpKnowledgeClient, LOGIN_PATH, SEARCH_PATH};

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
}

#[async_trait]
impl KnowledgeClient for HttpKnowledgeClient {
    async fn login(&self, email: &str) -> Result<Identity, RequestError> {
        let url = self.endpoint(LOGIN_PATH);
        debug!(%url, "login request");

        let response = self
            .http
            .post(&url)
            .json(&LoginBody { email })
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn search(
        &self,
        token: &str,
        request: &SearchRequest,
    ) -> Result<SearchPayload, RequestError> {
        let url = self.endpoint(SEARCH_PATH);
        debug!(%url, "search request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        Self::decode(response).await
    }
}
