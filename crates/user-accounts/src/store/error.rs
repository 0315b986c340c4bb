use record_actor::RecordError;
use thiserror::Error;

use crate::model::EntityKind;

/// Errors raised by the persistence collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backend stopped accepting requests.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// A record of this kind already holds `key`.
    #[error("{kind} already has {key}")]
    Duplicate { kind: EntityKind, key: String },

    /// The backend refused the record.
    #[error("record rejected: {0}")]
    Rejected(String),
}

impl StoreError {
    pub(crate) fn from_record(kind: EntityKind, e: RecordError) -> Self {
        match e {
            RecordError::ActorClosed | RecordError::ActorDropped => {
                StoreError::Unavailable(format!("{kind}: {e}"))
            }
            RecordError::NotFound(id) => StoreError::NotFound { kind, id },
            RecordError::Duplicate(key) => StoreError::Duplicate { kind, key },
            RecordError::Rejected(reason) => StoreError::Rejected(reason.to_string()),
        }
    }
}
