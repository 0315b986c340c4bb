use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use super::password::{hash_password, verify_password};
use super::{Service, ServiceError};
use crate::model::{Address, Card, EntityKind, Health, NewAddress, NewCard, NewUser, User};
use crate::store::Store;

/// The account [`Service`], independent of transport and storage backend.
pub struct AccountService<S: Store> {
    store: Arc<S>,
}

impl<S: Store> Clone for AccountService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Store> AccountService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

fn require(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[async_trait]
impl<S: Store> Service for AccountService<S> {
    #[instrument(skip(self, password))]
    async fn login(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        let mut user = self
            .store
            .user_by_name(username)
            .await?
            .ok_or(ServiceError::Auth)?;

        if !verify_password(password, &user.password) {
            warn!("Password mismatch");
            return Err(ServiceError::Auth);
        }

        self.hydrate_user(&mut user).await?;
        info!(user_id = %user.id, "Logged in");
        Ok(user)
    }

    #[instrument(skip(self, password, first_name, last_name))]
    async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, ServiceError> {
        require("username", username)?;
        require("password", password)?;
        require("email", email)?;

        // Uniqueness itself is enforced by the user actor.
        if self.store.user_by_name(username).await?.is_some() {
            debug!("Username taken");
            return Err(ServiceError::Validation(format!(
                "username {username} is taken"
            )));
        }

        let hashed = hash_password(password)?;
        let id = self
            .store
            .create_user(NewUser {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                username: username.to_string(),
                password_hash: hashed.hash,
                salt: hashed.salt,
            })
            .await?;
        info!(user_id = %id, "User registered");
        Ok(id)
    }

    async fn get_users(&self, id: &str) -> Result<Vec<User>, ServiceError> {
        if id.is_empty() {
            return Ok(self.store.users().await?);
        }
        Ok(self.store.user(id).await?.into_iter().collect())
    }

    async fn get_addresses(&self, id: &str) -> Result<Vec<Address>, ServiceError> {
        if id.is_empty() {
            return Ok(self.store.addresses().await?);
        }
        Ok(self.store.address(id).await?.into_iter().collect())
    }

    async fn get_cards(&self, id: &str) -> Result<Vec<Card>, ServiceError> {
        let mut cards: Vec<Card> = if id.is_empty() {
            self.store.cards().await?
        } else {
            self.store.card(id).await?.into_iter().collect()
        };
        cards.iter_mut().for_each(Card::mask);
        Ok(cards)
    }

    async fn post_user(&self, user: User) -> Result<String, ServiceError> {
        self.register(
            &user.username,
            &user.password,
            &user.email,
            &user.first_name,
            &user.last_name,
        )
        .await
    }

    #[instrument(skip(self, address))]
    async fn post_address(&self, address: Address, user_id: &str) -> Result<String, ServiceError> {
        require("userID", user_id)?;
        let id = self
            .store
            .create_address(NewAddress {
                address,
                user_id: user_id.to_string(),
            })
            .await?;
        Ok(id)
    }

    #[instrument(skip(self, card))]
    async fn post_card(&self, card: Card, user_id: &str) -> Result<String, ServiceError> {
        require("userID", user_id)?;
        let id = self
            .store
            .create_card(NewCard {
                card,
                user_id: user_id.to_string(),
            })
            .await?;
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), ServiceError> {
        self.store.delete(kind, id).await?;
        Ok(())
    }

    async fn health(&self) -> Vec<Health> {
        let db_status = match self.store.ping().await {
            Ok(()) => Health::OK,
            Err(e) => {
                warn!(error = %e, "Store ping failed");
                Health::ERR
            }
        };
        vec![
            Health::new("user", Health::OK),
            Health::new("user-db", db_status),
        ]
    }

    async fn hydrate_user(&self, user: &mut User) -> Result<(), ServiceError> {
        self.store.user_attributes(user).await?;
        user.mask_cards();
        Ok(())
    }
}
