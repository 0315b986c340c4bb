//! # User Accounts
//!
//! The request/response binding layer of a user-account service.
//!
//! A transport decodes a [`Request`](resolver::Request), the [`Resolver`](resolver::Resolver)
//! invokes one operation on a [`Service`](service::Service), shapes the result, and hands a
//! [`Response`](resolver::Response) back for encoding.
//!
//! ## Module Tour
//!
//! ### 1. The Binding ([`resolver`])
//! - **Role**: request values in, response values out. Home of the resource-view
//!   resolution rules for user, address and card reads.
//! - **Key items**: [`Resolver`](resolver::Resolver), [`Resolved`](resolver::Resolved),
//!   [`Embedded`](resolver::Embedded).
//!
//! ### 2. The Capability ([`service`])
//! - **Role**: account operations behind the [`Service`](service::Service) trait.
//!   [`AccountService`](service::AccountService) implements them over a store.
//!
//! ### 3. The Collaborator ([`store`])
//! - **Role**: persistence. [`AccountStore`](store::AccountStore) keeps users, addresses
//!   and cards in one record actor each (see the `record-actor` crate).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: configuration, tracing setup, and starting/stopping the record actors.
//!
//! ### 5. Testing ([`mock`])
//! - **Role**: [`MockService`](mock::MockService), an expectation-driven `Service` for
//!   exercising the resolver without a store.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -p user-accounts
//! ```

pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod resolver;
pub mod service;
pub mod store;
