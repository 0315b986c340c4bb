//! The account Service capability.
//!
//! [`Service`] is the abstract operation set the resolver drives; it owns no
//! data. [`AccountService`] implements it over any [`Store`](crate::store::Store).

pub mod accounts;
pub mod error;
pub mod password;

pub use accounts::*;
pub use error::*;

use async_trait::async_trait;

use crate::model::{Address, Card, EntityKind, Health, User};

/// Account operations, one strongly typed method each.
///
/// "get" methods treat an empty `id` as "list all". A non-empty `id` that
/// matches nothing yields an empty vector, not an error.
#[async_trait]
pub trait Service: Send + Sync {
    /// Fails with [`ServiceError::Auth`] on an unknown user or wrong password.
    async fn login(&self, username: &str, password: &str) -> Result<User, ServiceError>;

    /// Returns the id of the new user.
    async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, ServiceError>;

    async fn get_users(&self, id: &str) -> Result<Vec<User>, ServiceError>;
    async fn get_addresses(&self, id: &str) -> Result<Vec<Address>, ServiceError>;
    async fn get_cards(&self, id: &str) -> Result<Vec<Card>, ServiceError>;

    async fn post_user(&self, user: User) -> Result<String, ServiceError>;
    async fn post_address(&self, address: Address, user_id: &str) -> Result<String, ServiceError>;
    async fn post_card(&self, card: Card, user_id: &str) -> Result<String, ServiceError>;

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), ServiceError>;

    /// Never fails; an unhealthy subsystem is reported through its status.
    async fn health(&self) -> Vec<Health>;

    /// Loads the addresses and cards owned by `user` into it.
    ///
    /// On error `user` may be partially hydrated.
    async fn hydrate_user(&self, user: &mut User) -> Result<(), ServiceError>;
}
