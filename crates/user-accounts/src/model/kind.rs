use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kinds of record a delete request can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Customers,
    Addresses,
    Cards,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Customers => "customers",
            EntityKind::Addresses => "addresses",
            EntityKind::Cards => "cards",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind: {0}")]
pub struct UnknownEntityKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customers" => Ok(EntityKind::Customers),
            "addresses" => Ok(EntityKind::Addresses),
            "cards" => Ok(EntityKind::Cards),
            other => Err(UnknownEntityKind(other.to_string())),
        }
    }
}
