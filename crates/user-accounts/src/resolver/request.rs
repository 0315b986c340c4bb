//! Inbound request values, one per operation.

use serde::{Deserialize, Serialize};

use crate::model::{Address, Card, EntityKind, User};

/// Resource-view selector: which view of a user a read returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Attribute {
    /// The entity itself.
    #[default]
    None,
    Addresses,
    Cards,
}

impl From<&str> for Attribute {
    /// Anything other than `addresses` or `cards` selects the entity itself.
    fn from(attr: &str) -> Self {
        match attr {
            "addresses" => Attribute::Addresses,
            "cards" => Attribute::Cards,
            _ => Attribute::None,
        }
    }
}

impl From<String> for Attribute {
    fn from(attr: String) -> Self {
        Attribute::from(attr.as_str())
    }
}

impl From<Attribute> for String {
    fn from(attr: Attribute) -> Self {
        match attr {
            Attribute::None => String::new(),
            Attribute::Addresses => "addresses".into(),
            Attribute::Cards => "cards".into(),
        }
    }
}

/// `(id, attr)` selector shared by the user, address and card reads.
///
/// An empty `id` asks for the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetRequest {
    pub id: String,
    pub attr: Attribute,
}

impl GetRequest {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn one(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attr: Attribute::None,
        }
    }

    pub fn nested(id: impl Into<String>, attr: impl Into<Attribute>) -> Self {
        Self {
            id: id.into(),
            attr: attr.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPostRequest {
    #[serde(flatten)]
    pub address: Address,
    #[serde(rename = "userID")]
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPostRequest {
    #[serde(flatten)]
    pub card: Card,
    #[serde(rename = "userID")]
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub entity: EntityKind,
    pub id: String,
}

/// Every operation the resolver can dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Login(LoginRequest),
    Register(RegisterRequest),
    GetUsers(GetRequest),
    GetAddresses(GetRequest),
    GetCards(GetRequest),
    PostUser(User),
    PostAddress(AddressPostRequest),
    PostCard(CardPostRequest),
    Delete(DeleteRequest),
    Health,
}

impl Request {
    /// Operation name, used as the outer span name.
    pub fn operation(&self) -> &'static str {
        match self {
            Request::Login(_) => "Login",
            Request::Register(_) => "Register",
            Request::GetUsers(_) => "Get Users",
            Request::GetAddresses(_) => "Get Addresses",
            Request::GetCards(_) => "Get Cards",
            Request::PostUser(_) => "Post User",
            Request::PostAddress(_) => "Post Address",
            Request::PostCard(_) => "Post Card",
            Request::Delete(_) => "Delete Entity",
            Request::Health => "Health Check",
        }
    }
}
