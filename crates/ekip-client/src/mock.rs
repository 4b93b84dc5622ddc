//! Scripted `KnowledgeClient` for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::error::RequestError;
use crate::model::{Citation, Identity, SearchPayload, SearchRequest};
use crate::KnowledgeClient;

type SearchResult = Result<SearchPayload, RequestError>;

enum Reply {
    Ready(SearchResult),
    Gated(oneshot::Receiver<SearchResult>),
}

/// Replays queued login and search results in order. Gated replies stay
/// in flight until the test sends through the returned sender.
#[derive(Default)]
pub(crate) struct MockClient {
    login_replies: Mutex<VecDeque<Result<Identity, RequestError>>>,
    search_replies: Mutex<VecDeque<Reply>>,
    logins: Mutex<Vec<String>>,
    searches: Mutex<Vec<(String, SearchRequest)>>,
}

impl MockClient {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn push_login(&self, reply: Result<Identity, RequestError>) {
        self.login_replies.lock().unwrap().push_back(reply);
    }

    pub(crate) fn push_search(&self, reply: SearchResult) {
        self.search_replies
            .lock()
            .unwrap()
            .push_back(Reply::Ready(reply));
    }

    pub(crate) fn push_gated(&self) -> oneshot::Sender<SearchResult> {
        let (tx, rx) = oneshot::channel();
        self.search_replies
            .lock()
            .unwrap()
            .push_back(Reply::Gated(rx));
        tx
    }

    pub(crate) fn logins(&self) -> Vec<String> {
        self.logins.lock().unwrap().clone()
    }

    /// `(token, request)` for every search received.
    pub(crate) fn searches(&self) -> Vec<(String, SearchRequest)> {
        self.searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl KnowledgeClient for MockClient {
    async fn login(&self, email: &str) -> Result<Identity, RequestError> {
        self.logins.lock().unwrap().push(email.to_string());
        self.login_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::Network("no scripted login".into())))
    }

    async fn search(&self, token: &str, request: &SearchRequest) -> SearchResult {
        self.searches
            .lock()
            .unwrap()
            .push((token.to_string(), request.clone()));
        let reply = self.search_replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(RequestError::Network("gate dropped".into()))),
            None => Err(RequestError::Network("no scripted search".into())),
        }
    }
}

pub(crate) fn identity(token: &str, department: &str) -> Identity {
    Identity {
        token: Some(token.into()),
        user_id: Some(format!("user-{token}")),
        email: Some(format!("{token}@company.com")),
        department: Some(department.into()),
        roles: Some(vec![department.into()]),
    }
}

pub(crate) fn payload(answer: &str) -> SearchPayload {
    SearchPayload {
        answer: answer.into(),
        latency_ms: 42,
        chunks_found: 1,
        citations: vec![Citation {
            marker: "1".into(),
            doc_title: format!("Source for {answer}"),
            department: "HR".into(),
            doc_id: None,
            chunk_text: None,
        }],
    }
}
