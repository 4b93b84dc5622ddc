//! Wire payloads and conversation records.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Login payload as returned by the service. Every field is optional on the
/// wire; `Session::from_identity` decides what is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub roles: Option<Vec<String>>,
}

/// Body of a search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_filter: Option<String>,
}

/// One source backing an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Label used in the answer text. The service sends an integer; strings
    /// are accepted too.
    #[serde(deserialize_with = "marker_from_wire")]
    pub marker: String,
    pub doc_title: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_text: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireMarker {
    Text(String),
    Int(i64),
}

fn marker_from_wire<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match WireMarker::deserialize(deserializer)? {
        WireMarker::Text(text) => text,
        WireMarker::Int(n) => n.to_string(),
    })
}

/// Successful search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPayload {
    pub answer: String,
    pub latency_ms: u64,
    pub chunks_found: u64,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

/// One answered question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    query: String,
    answer: String,
    latency_ms: u64,
    chunks_found: u64,
    citations: Vec<Citation>,
}

impl Turn {
    /// Build a turn from the dispatched query and the server's payload.
    ///
    /// Citation order is kept as sent. A repeated marker keeps only its
    /// first citation.
    pub fn new(query: impl Into<String>, payload: SearchPayload) -> Self {
        let mut citations: Vec<Citation> = Vec::with_capacity(payload.citations.len());
        for citation in payload.citations {
            if citations.iter().any(|c| c.marker == citation.marker) {
                warn!(marker = %citation.marker, "dropping citation with duplicate marker");
                continue;
            }
            citations.push(citation);
        }

        Self {
            query: query.into(),
            answer: payload.answer,
            latency_ms: payload.latency_ms,
            chunks_found: payload.chunks_found,
            citations,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn latency_ms(&self) -> u64 {
        self.latency_ms
    }

    pub fn chunks_found(&self) -> u64 {
        self.chunks_found
    }

    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn citation(marker: &str, title: &str) -> Citation {
        Citation {
            marker: marker.into(),
            doc_title: title.into(),
            department: "HR".into(),
            doc_id: None,
            chunk_text: None,
        }
    }

    #[test]
    fn search_payload_from_service_json() {
        let payload: SearchPayload = serde_json::from_str(
            r#"{
                "answer": "15 days/year",
                "latency_ms": 120,
                "chunks_found": 3,
                "citations": [
                    {"marker": 1, "doc_title": "HR Handbook", "doc_id": "d-1",
                     "department": "HR", "chunk_text": "Employees accrue..."},
                    {"marker": "2", "doc_title": "Leave FAQ", "department": "HR"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(payload.answer, "15 days/year");
        assert_eq!(payload.latency_ms, 120);
        assert_eq!(payload.chunks_found, 3);
        assert_eq!(payload.citations[0].marker, "1");
        assert_eq!(payload.citations[0].doc_id.as_deref(), Some("d-1"));
        assert_eq!(payload.citations[1].marker, "2");
        assert_eq!(payload.citations[1].chunk_text, None);
    }

    #[test]
    fn search_payload_without_citations() {
        let payload: SearchPayload =
            serde_json::from_str(r#"{"answer": "n/a", "latency_ms": 0, "chunks_found": 0}"#)
                .unwrap();
        assert!(payload.citations.is_empty());
    }

    #[test]
    fn negative_latency_is_rejected() {
        let result: Result<SearchPayload, _> = serde_json::from_str(
            r#"{"answer": "x", "latency_ms": -5, "chunks_found": 0, "citations": []}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn search_request_omits_absent_filter() {
        let request = SearchRequest {
            query: "What is the PTO policy?".into(),
            department_filter: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"query": "What is the PTO policy?"})
        );

        let request = SearchRequest {
            query: "pricing".into(),
            department_filter: Some("Sales".into()),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"query": "pricing", "department_filter": "Sales"})
        );
    }

    #[test]
    fn turn_keeps_citation_order() {
        let payload = SearchPayload {
            answer: "a".into(),
            latency_ms: 10,
            chunks_found: 5,
            citations: vec![citation("3", "C"), citation("1", "A"), citation("2", "B")],
        };
        let turn = Turn::new("q", payload);
        let markers: Vec<&str> = turn.citations().iter().map(|c| c.marker.as_str()).collect();
        assert_eq!(markers, ["3", "1", "2"]);
    }

    #[test]
    fn turn_drops_repeated_markers() {
        let payload = SearchPayload {
            answer: "a".into(),
            latency_ms: 10,
            chunks_found: 2,
            citations: vec![citation("1", "First"), citation("1", "Second")],
        };
        let turn = Turn::new("q", payload);
        assert_eq!(turn.citations().len(), 1);
        assert_eq!(turn.citations()[0].doc_title, "First");
    }

    #[test]
    fn identity_tolerates_missing_fields() {
        let identity: Identity = serde_json::from_str(r#"{"token": "t1"}"#).unwrap();
        assert_eq!(identity.token.as_deref(), Some("t1"));
        assert_eq!(identity.user_id, None);
        assert_eq!(identity.roles, None);
    }
}
