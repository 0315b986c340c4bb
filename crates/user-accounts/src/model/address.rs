use serde::{Deserialize, Serialize};

/// A postal address belonging to one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub id: String,
    pub street: String,
    pub number: String,
    pub country: String,
    pub city: String,
    pub postcode: String,
    /// Owning user; not part of the encoded form.
    #[serde(skip)]
    pub user_id: String,
}

/// Payload for storing a new address under `user_id`.
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub address: Address,
    pub user_id: String,
}
