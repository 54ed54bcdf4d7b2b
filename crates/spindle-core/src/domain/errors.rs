//! Core error taxonomy.
//!
//! The core has no transient failure modes (no I/O, no network), so this
//! stays small: `NotFound` for absent ids, `InvalidCursor` for tokens that
//! fail to decode at the boundary. Nothing is retried or swallowed here;
//! errors are returned synchronously to the immediate caller.

use thiserror::Error;

use super::ids::TaskId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The id references no live record. Always recoverable by the caller.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A cursor token failed to decode into a `(created_at, id)` pair.
    #[error("invalid cursor: {0}")]
    InvalidCursor(String),
}
