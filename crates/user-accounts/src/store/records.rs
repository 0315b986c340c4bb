//! Record-actor bindings for the account model.
//!
//! Each model type becomes a [`StoredRecord`] so it can be kept by its own
//! `ResourceActor`. Creation payloads are checked here, before anything is stored.

use record_actor::StoredRecord;
use thiserror::Error;

use crate::model::{Address, Card, NewAddress, NewCard, NewUser, User};

/// A creation payload the store refuses to keep.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {kind}: {reason}")]
pub struct InvalidRecord {
    pub kind: &'static str,
    pub reason: &'static str,
}

impl StoredRecord for User {
    type Id = String;
    type Create = NewUser;
    type Error = InvalidRecord;

    fn from_create_params(id: String, params: NewUser) -> Result<Self, InvalidRecord> {
        if params.username.is_empty() {
            return Err(InvalidRecord {
                kind: "user",
                reason: "username is empty",
            });
        }
        Ok(Self {
            id,
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            username: params.username,
            password: params.password_hash,
            salt: params.salt,
            addresses: Vec::new(),
            cards: Vec::new(),
        })
    }

    /// Usernames are unique.
    fn unique_key(&self) -> Option<String> {
        Some(self.username.clone())
    }
}

impl StoredRecord for Address {
    type Id = String;
    type Create = NewAddress;
    type Error = InvalidRecord;

    fn from_create_params(id: String, params: NewAddress) -> Result<Self, InvalidRecord> {
        if params.user_id.is_empty() {
            return Err(InvalidRecord {
                kind: "address",
                reason: "owning user is missing",
            });
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            ..params.address
        })
    }

    fn owner(&self) -> Option<&str> {
        Some(&self.user_id)
    }
}

impl StoredRecord for Card {
    type Id = String;
    type Create = NewCard;
    type Error = InvalidRecord;

    fn from_create_params(id: String, params: NewCard) -> Result<Self, InvalidRecord> {
        if params.user_id.is_empty() {
            return Err(InvalidRecord {
                kind: "card",
                reason: "owning user is missing",
            });
        }
        if params.card.long_num.is_empty() {
            return Err(InvalidRecord {
                kind: "card",
                reason: "card number is empty",
            });
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            ..params.card
        })
    }

    fn owner(&self) -> Option<&str> {
        Some(&self.user_id)
    }
}
