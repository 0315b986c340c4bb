//! # Generic Messages
//!
//! Message types exchanged between a [`ResourceClient`](crate::ResourceClient) and
//! its [`ResourceActor`](crate::ResourceActor).

use crate::entity::StoredRecord;
use crate::error::RecordError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, RecordError>>;

/// Predicate applied by the actor when listing records.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Request sent to the actor.
///
/// The variants map to the read/write operations a record store needs:
///
/// - **Create**: builds a record from [`StoredRecord::Create`] under a fresh id.
/// - **Get**: fetches one record by id.
/// - **List**: returns records in insertion order, optionally filtered.
/// - **Delete**: removes one record.
/// - **Count**: counts records; doubles as a liveness probe.
pub enum ResourceRequest<T: StoredRecord> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Option<Filter<T>>,
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Count {
        respond_to: Response<usize>,
    },
}
