//! reqwest implementation of `KnowledgeClient`.
//!
//! Talks JSON over HTTP to the knowledge-search service:
//! `POST {base_url}/auth/login` and `POST {base_url}/search` with a
//! Bearer token.

mod api;
mod client;

pub use client::HttpKnowledgeClient;
