//! Text rendering of conversation state.

use ekip_client::{ConversationState, Session, Turn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::command::EXAMPLE_QUESTIONS;

pub const SEARCHING: &str = "Searching…";
pub const BUSY: &str = "Still searching; press Enter again once the answer arrives.";

/// A turn as printed: question, answer, stats line, numbered sources.
pub fn render_turn(turn: &Turn) -> String {
    let mut out = format!("? {}\n\n{}\n\n", turn.query(), turn.answer());
    out.push_str(&format!(
        "{} ms · {} chunks · {} sources",
        turn.latency_ms(),
        turn.chunks_found(),
        turn.citations().len()
    ));
    for citation in turn.citations() {
        out.push_str(&format!(
            "\n  [{}] {} ({})",
            citation.marker, citation.doc_title, citation.department
        ));
    }
    out
}

pub fn render_session(session: &Session) -> String {
    let who = session.email().unwrap_or_else(|| session.user_id());
    format!(
        "Signed in as {who} · {} · roles: {}",
        session.department(),
        session.roles().join(", ")
    )
}

pub fn render_examples() -> String {
    EXAMPLE_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, q)| format!("  {}. {q}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_history(state: &ConversationState) -> String {
    if state.history.is_empty() {
        return "No questions asked yet.".into();
    }
    state
        .history
        .iter()
        .map(render_turn)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Lines to print for the step from `prev` to `next`.
///
/// Watch updates may coalesce, so this compares whole snapshots rather
/// than replaying individual transitions.
pub fn render_changes(prev: &ConversationState, next: &ConversationState) -> Vec<String> {
    let mut lines = Vec::new();

    if next.in_flight && !prev.in_flight {
        lines.push(SEARCHING.to_string());
    }

    // After a reset every turn in `next` is new.
    let start = if next.generation == prev.generation {
        prev.history.len().min(next.history.len())
    } else {
        0
    };
    lines.extend(next.history[start..].iter().map(render_turn));

    if next.last_error != prev.last_error {
        if let Some(message) = &next.last_error {
            lines.push(format!("error: {message}"));
        }
    }

    if next.department_filter != prev.department_filter {
        lines.push(match &next.department_filter {
            Some(dept) => format!("Filtering by department: {dept}"),
            None => "Department filter cleared".into(),
        });
    }

    lines
}

/// Print state changes until the manager is dropped.
pub fn spawn_renderer(mut rx: watch::Receiver<ConversationState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut prev = rx.borrow_and_update().clone();
        while rx.changed().await.is_ok() {
            let next = rx.borrow_and_update().clone();
            for line in render_changes(&prev, &next) {
                println!("{line}\n");
            }
            prev = next;
        }
        tracing::debug!("renderer stopped");
    })
}
