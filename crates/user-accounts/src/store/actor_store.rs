use std::sync::Arc;

use async_trait::async_trait;
use record_actor::ResourceClient;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use super::{Store, StoreError};
use crate::model::{Address, Card, EntityKind, NewAddress, NewCard, NewUser, User};

/// [`Store`] backed by one record actor per record kind.
///
/// Cheap to clone; every clone talks to the same actors. The actors stop once
/// every clone has been dropped.
///
/// Usernames are unique inside the user actor. Creating an owned address or
/// card and deleting a customer both hold the `ownership` lock, so an owned
/// record is only ever stored under a customer that exists.
#[derive(Clone)]
pub struct AccountStore {
    users: ResourceClient<User>,
    addresses: ResourceClient<Address>,
    cards: ResourceClient<Card>,
    ownership: Arc<Mutex<()>>,
}

impl AccountStore {
    pub fn new(
        users: ResourceClient<User>,
        addresses: ResourceClient<Address>,
        cards: ResourceClient<Card>,
    ) -> Self {
        Self {
            users,
            addresses,
            cards,
            ownership: Arc::new(Mutex::new(())),
        }
    }

    /// Must be called with the `ownership` lock held.
    async fn ensure_owner(&self, user_id: &str) -> Result<(), StoreError> {
        if self.user(user_id).await?.is_none() {
            return Err(StoreError::Rejected(format!("unknown user {user_id}")));
        }
        Ok(())
    }

    /// Reads everything the customer owns before deleting anything, so a
    /// failed read leaves the customer and its records untouched.
    async fn delete_user(&self, id: &str) -> Result<(), StoreError> {
        let _owners = self.ownership.lock().await;

        if self.user(id).await?.is_none() {
            return Err(StoreError::NotFound {
                kind: EntityKind::Customers,
                id: id.to_string(),
            });
        }

        let addresses = self
            .addresses
            .list_owned_by(id)
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Addresses, e))?;
        let cards = self
            .cards
            .list_owned_by(id)
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Cards, e))?;

        for address in addresses {
            self.addresses
                .delete(address.id)
                .await
                .map_err(|e| StoreError::from_record(EntityKind::Addresses, e))?;
        }
        for card in cards {
            self.cards
                .delete(card.id)
                .await
                .map_err(|e| StoreError::from_record(EntityKind::Cards, e))?;
        }

        self.users
            .delete(id.to_string())
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Customers, e))?;
        info!(user_id = %id, "Customer and owned records deleted");
        Ok(())
    }
}

#[async_trait]
impl Store for AccountStore {
    async fn users(&self) -> Result<Vec<User>, StoreError> {
        self.users
            .list()
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Customers, e))
    }

    async fn user(&self, id: &str) -> Result<Option<User>, StoreError> {
        self.users
            .get(id.to_string())
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Customers, e))
    }

    async fn user_by_name(&self, username: &str) -> Result<Option<User>, StoreError> {
        let username = username.to_string();
        let found = self
            .users
            .find(move |user| user.username == username)
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Customers, e))?;
        Ok(found.into_iter().next())
    }

    async fn addresses(&self) -> Result<Vec<Address>, StoreError> {
        self.addresses
            .list()
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Addresses, e))
    }

    async fn address(&self, id: &str) -> Result<Option<Address>, StoreError> {
        self.addresses
            .get(id.to_string())
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Addresses, e))
    }

    async fn cards(&self) -> Result<Vec<Card>, StoreError> {
        self.cards
            .list()
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Cards, e))
    }

    async fn card(&self, id: &str) -> Result<Option<Card>, StoreError> {
        self.cards
            .get(id.to_string())
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Cards, e))
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn user_attributes(&self, user: &mut User) -> Result<(), StoreError> {
        user.addresses = self
            .addresses
            .list_owned_by(&user.id)
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Addresses, e))?;
        user.cards = self
            .cards
            .list_owned_by(&user.id)
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Cards, e))?;
        debug!(
            addresses = user.addresses.len(),
            cards = user.cards.len(),
            "Attributes loaded"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    async fn create_user(&self, user: NewUser) -> Result<String, StoreError> {
        self.users
            .create(user)
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Customers, e))
    }

    #[instrument(skip(self))]
    async fn create_address(&self, address: NewAddress) -> Result<String, StoreError> {
        let _owners = self.ownership.lock().await;
        self.ensure_owner(&address.user_id).await?;
        self.addresses
            .create(address)
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Addresses, e))
    }

    #[instrument(skip(self, card), fields(user_id = %card.user_id))]
    async fn create_card(&self, card: NewCard) -> Result<String, StoreError> {
        let _owners = self.ownership.lock().await;
        self.ensure_owner(&card.user_id).await?;
        self.cards
            .create(card)
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Cards, e))
    }

    #[instrument(skip(self))]
    async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), StoreError> {
        match kind {
            EntityKind::Customers => self.delete_user(id).await,
            EntityKind::Addresses => self
                .addresses
                .delete(id.to_string())
                .await
                .map_err(|e| StoreError::from_record(kind, e)),
            EntityKind::Cards => self
                .cards
                .delete(id.to_string())
                .await
                .map_err(|e| StoreError::from_record(kind, e)),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.users
            .count()
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Customers, e))?;
        self.addresses
            .count()
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Addresses, e))?;
        self.cards
            .count()
            .await
            .map_err(|e| StoreError::from_record(EntityKind::Cards, e))?;
        Ok(())
    }
}
