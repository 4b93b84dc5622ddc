//! Authenticated identity for one application run.
//!
//! A `Session` is created from a login payload and never changes. The
//! `SessionHolder` owns the current one; consumers read it through a
//! `SessionHandle` and learn about logouts through `SessionObserver`.

mod holder;
mod types;

pub use holder::SessionHolder;
pub use types::{Session, SessionHandle, SessionObserver};
