use thiserror::Error;

use crate::model::EntityKind;
use crate::store::StoreError;

/// Errors surfaced by the account Service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed or duplicate input, rejected before or by persistence.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid credentials")]
    Auth,

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Backend failure with an opaque cause.
    #[error("store error: {0}")]
    Store(StoreError),
}

impl ServiceError {
    /// Stable numeric code for transport-level mapping and logging.
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::NotFound { .. } => 1003,
            ServiceError::Auth => 1004,
            ServiceError::Hashing(_) => 1101,
            ServiceError::Store(_) => 1200,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { kind, id } => ServiceError::NotFound { kind, id },
            StoreError::Duplicate { key, .. } => {
                ServiceError::Validation(format!("{key} is already taken"))
            }
            StoreError::Rejected(reason) => ServiceError::Validation(reason),
            other => ServiceError::Store(other),
        }
    }
}
