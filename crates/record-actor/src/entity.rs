//! # StoredRecord Trait
//!
//! The contract every record kind must satisfy to be kept by a [`ResourceActor`](crate::ResourceActor).
//!
//! Associated types keep each actor strongly typed: an address actor only accepts
//! the address creation payload, and the compiler rejects anything else.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A record that can be created, read, listed and deleted by a `ResourceActor`.
pub trait StoredRecord: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// Returned when a creation payload is rejected.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the full record from the generated id and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Identifier of the record that owns this one, if any.
    ///
    /// Used by [`ResourceClient::list_owned_by`](crate::ResourceClient::list_owned_by).
    fn owner(&self) -> Option<&str> {
        None
    }

    /// Key that must be unique among the stored records of this kind, if any.
    ///
    /// The actor refuses a create whose key is already held by another record
    /// with [`RecordError::Duplicate`](crate::RecordError::Duplicate).
    fn unique_key(&self) -> Option<String> {
        None
    }
}
