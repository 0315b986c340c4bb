//! # Record Errors
//!
//! Errors shared by every actor and client in this crate.

/// Errors that can occur while talking to a record actor.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Duplicate key: {0}")]
    Duplicate(String),
    #[error("Record rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}
