//! Persistence collaborator.
//!
//! The [`Store`] trait is the only view of persistence the service layer has.
//! [`AccountStore`] implements it on top of one record actor per record kind.

pub mod actor_store;
pub mod error;
pub mod records;

pub use actor_store::*;
pub use error::*;
pub use records::*;

use async_trait::async_trait;

use crate::model::{Address, Card, EntityKind, NewAddress, NewCard, NewUser, User};

/// Loads, saves and hydrates account records.
#[async_trait]
pub trait Store: Send + Sync {
    async fn users(&self) -> Result<Vec<User>, StoreError>;
    async fn user(&self, id: &str) -> Result<Option<User>, StoreError>;
    async fn user_by_name(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn addresses(&self) -> Result<Vec<Address>, StoreError>;
    async fn address(&self, id: &str) -> Result<Option<Address>, StoreError>;

    async fn cards(&self) -> Result<Vec<Card>, StoreError>;
    async fn card(&self, id: &str) -> Result<Option<Card>, StoreError>;

    /// Fills `user.addresses` and `user.cards` with the records the user owns.
    async fn user_attributes(&self, user: &mut User) -> Result<(), StoreError>;

    async fn create_user(&self, user: NewUser) -> Result<String, StoreError>;
    async fn create_address(&self, address: NewAddress) -> Result<String, StoreError>;
    async fn create_card(&self, card: NewCard) -> Result<String, StoreError>;

    /// Deletes one record. Deleting a customer also deletes what it owns.
    async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), StoreError>;

    /// Succeeds while the backend can serve requests.
    async fn ping(&self) -> Result<(), StoreError>;
}
