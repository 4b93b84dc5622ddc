//! Top-level application state.
//!
//! Owns the session holder and conversation manager, and drives the
//! line-oriented input loop. Output is produced by a renderer task that
//! watches conversation state.

mod command;
mod core;
mod dispatch;
mod render;

pub use core::EkipApp;
