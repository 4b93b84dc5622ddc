//! Conversation state machine.
//!
//! `QuerySessionManager` turns user text into search requests and search
//! results into history. At most one request is in flight per
//! conversation, so history is always in dispatch order. Responses that
//! arrive after a reset or a session change are discarded.

mod guard;
mod manager;
mod state;
mod submit;


pub use manager::QuerySessionManager;
pub use state::{ConversationState, Phase, SearchOutcome, Submission};
