//! Account data model: users, their addresses and cards, and health records.
//!
//! Field names follow the wire format the transport layer encodes (`firstName`,
//! `longNum`, ...). Back-references to the owning user and credential material
//! never leave the process.

pub mod address;
pub mod card;
pub mod health;
pub mod kind;
pub mod user;

pub use address::*;
pub use card::*;
pub use health::*;
pub use kind::*;
pub use user::*;
