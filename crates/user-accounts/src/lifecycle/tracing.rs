//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter.
//!
//! `RUST_LOG` wins when set; otherwise the filter from [`Config::log_filter`](super::Config)
//! is used.
//!
//! ```bash
//! # Request flow with resolver spans
//! RUST_LOG=info cargo run -p user-accounts
//!
//! # Record actor traffic, including payloads
//! RUST_LOG=record_actor=debug,user_accounts=debug cargo run -p user-accounts
//! ```
//!
//! Spans opened by the resolver carry `op` and `service = "user"`, so a single
//! request reads as e.g. `resolve{op="Get Users"}:resolve{op="users from db"}`.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. A subscriber installed earlier (by a test
/// harness, or a previous call) is kept.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
    {
        debug!(error = %e, "Keeping the installed tracing subscriber");
    }
}
