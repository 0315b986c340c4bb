//! # Record Actor
//!
//! A single-task, in-memory record store built on the **Actor Model**.
//!
//! Each [`ResourceActor`] owns the records of exactly one kind (users, addresses,
//! cards, ...) and processes requests sequentially from a Tokio mpsc channel, so
//! the store itself needs no locks. Callers talk to it through a cloneable
//! [`ResourceClient`].
//!
//! ## Operations
//!
//! | Request | Result |
//! |---------|--------|
//! | `Create` | new id generated by the actor's id function, or [`RecordError::Duplicate`] when the record's unique key is taken |
//! | `Get` | `Option<T>` |
//! | `List` | every record, or only those matching a filter, in insertion order |
//! | `Delete` | `()` or [`RecordError::NotFound`] |
//! | `Count` | number of stored records |
//!
//! ## Example
//!
//! ```rust
//! use record_actor::{ResourceActor, StoredRecord};
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: String, owner: String, text: String }
//!
//! #[derive(Debug)]
//! struct NewNote { owner: String, text: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("empty note")]
//! struct EmptyNote;
//!
//! impl StoredRecord for Note {
//!     type Id = String;
//!     type Create = NewNote;
//!     type Error = EmptyNote;
//!
//!     fn from_create_params(id: String, params: NewNote) -> Result<Self, EmptyNote> {
//!         if params.text.is_empty() {
//!             return Err(EmptyNote);
//!         }
//!         Ok(Self { id, owner: params.owner, text: params.text })
//!     }
//!
//!     fn owner(&self) -> Option<&str> {
//!         Some(&self.owner)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut next = 0u32;
//!     let (actor, client) = ResourceActor::<Note>::new(8, move || {
//!         next += 1;
//!         format!("n{next}")
//!     });
//!     tokio::spawn(actor.run());
//!
//!     let id = client
//!         .create(NewNote { owner: "u1".into(), text: "hello".into() })
//!         .await
//!         .unwrap();
//!     assert_eq!(id, "n1");
//!     assert_eq!(client.list_owned_by("u1").await.unwrap().len(), 1);
//! }
//! ```

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::StoredRecord;
pub use error::RecordError;
pub use message::{Filter, ResourceRequest, Response};
