use record_actor::ResourceActor;
use tracing::{error, info};

use super::Config;
use crate::model::{Address, Card, User};
use crate::store::AccountStore;

/// Starts and stops the record actors behind an [`AccountStore`].
///
/// # Architecture
///
/// One actor per record kind:
/// - **Users**: ids `u1`, `u2`, ...
/// - **Addresses**: ids `a1`, `a2`, ...
/// - **Cards**: ids `c1`, `c2`, ...
///
/// # Example
///
/// ```ignore
/// let system = AccountSystem::start(&Config::default());
/// let service = AccountService::new(system.store.clone());
/// // ... serve requests ...
/// drop(service);
/// system.shutdown().await?;
/// ```
pub struct AccountSystem {
    pub store: AccountStore,

    /// Actor tasks, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

fn sequential_ids(prefix: &'static str) -> impl FnMut() -> String + Send + 'static {
    let mut next: u64 = 0;
    move || {
        next += 1;
        format!("{prefix}{next}")
    }
}

impl AccountSystem {
    /// Spawns the user, address and card actors.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &Config) -> Self {
        let (user_actor, users) =
            ResourceActor::<User>::new(config.channel_buffer, sequential_ids("u"));
        let (address_actor, addresses) =
            ResourceActor::<Address>::new(config.channel_buffer, sequential_ids("a"));
        let (card_actor, cards) =
            ResourceActor::<Card>::new(config.channel_buffer, sequential_ids("c"));

        let handles = vec![
            tokio::spawn(user_actor.run()),
            tokio::spawn(address_actor.run()),
            tokio::spawn(card_actor.run()),
        ];
        info!(buffer = config.channel_buffer, "Account store started");

        Self {
            store: AccountStore::new(users, addresses, cards),
            handles,
        }
    }

    /// Drops this system's store handle and waits for every actor to finish.
    ///
    /// Actors only exit once *all* clones of the store are gone, so drop any
    /// services or resolvers holding one before calling this.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down account store...");
        drop(self.store);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Account store shutdown complete.");
        Ok(())
    }
}
