//! Runtime orchestration: configuration, tracing setup, and the record actors
//! behind the account store.

pub mod account_system;
pub mod config;
pub mod tracing;

pub use account_system::*;
pub use config::*;
pub use self::tracing::*;
