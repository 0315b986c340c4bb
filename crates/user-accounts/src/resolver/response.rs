//! Outbound response values.

use serde::{Deserialize, Serialize};

use crate::model::{Address, Card, Health, User};
use crate::service::ServiceError;

/// A sequence of entities tagged with its element kind.
///
/// Encodes as `{"customer": [...]}`, `{"address": [...]}` or `{"card": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collection {
    #[serde(rename = "customer")]
    Users(Vec<User>),
    #[serde(rename = "address")]
    Addresses(Vec<Address>),
    #[serde(rename = "card")]
    Cards(Vec<Card>),
}

impl Collection {
    pub fn len(&self) -> usize {
        match self {
            Collection::Users(items) => items.len(),
            Collection::Addresses(items) => items.len(),
            Collection::Cards(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collection-envelope: wraps a [`Collection`] under the `_embedded` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embedded {
    #[serde(rename = "_embedded")]
    pub embedded: Collection,
}

impl Embedded {
    pub fn users(users: Vec<User>) -> Self {
        Self {
            embedded: Collection::Users(users),
        }
    }

    pub fn addresses(addresses: Vec<Address>) -> Self {
        Self {
            embedded: Collection::Addresses(addresses),
        }
    }

    pub fn cards(cards: Vec<Card>) -> Self {
        Self {
            embedded: Collection::Cards(cards),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

/// Created-identifier record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub health: Vec<Health>,
}

/// Every response shape the resolver produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    User(User),
    Address(Address),
    Card(Card),
    LoggedIn(UserResponse),
    Embedded(Embedded),
    Created(PostResponse),
    Status(StatusResponse),
    Health(HealthResponse),
}

impl Response {
    pub fn embedded(&self) -> Option<&Collection> {
        match self {
            Response::Embedded(envelope) => Some(&envelope.embedded),
            _ => None,
        }
    }
}

/// A response value together with the Service error, if any, that produced it.
///
/// The resolver never drops an error: whatever placeholder it computed is
/// returned alongside the error so the transport can decide how to encode both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub response: T,
    pub error: Option<ServiceError>,
}

impl<T> Resolved<T> {
    pub fn ok(response: T) -> Self {
        Self {
            response,
            error: None,
        }
    }

    pub fn with_error(response: T, error: Option<ServiceError>) -> Self {
        Self { response, error }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            response: f(self.response),
            error: self.error,
        }
    }

    /// Drops the placeholder response when an error is present.
    pub fn into_result(self) -> Result<T, ServiceError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.response),
        }
    }
}
