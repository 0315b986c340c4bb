//! # Generic Actor Server
//!
//! The `ResourceActor` owns the records of one kind and processes messages
//! sequentially, so it has exclusive access to its store without locking.

use crate::client::ResourceClient;
use crate::entity::StoredRecord;
use crate::error::RecordError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of records.
///
/// # Usage Pattern
///
/// 1. **Create**: call [`ResourceActor::new`] to get the actor (server) and client (interface).
/// 2. **Run**: spawn [`ResourceActor::run`] in a background task.
/// 3. **Use**: clone the client wherever records are needed.
///
/// The actor stops once every client has been dropped.
///
/// # Implementation Details
///
/// Records live in a `HashMap` keyed by id. A separate id vector remembers
/// insertion order so that `List` returns records in the order they were created,
/// and `unique` maps each taken [`StoredRecord::unique_key`] to its record.
pub struct ResourceActor<T: StoredRecord> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    unique: HashMap<String, T::Id>,
    next_id_fn: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: StoredRecord> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the mpsc channel. When full, client calls wait.
    /// * `next_id_fn` - Generates the id of each newly created record.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            unique: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Just the type name, e.g. "Address" instead of "user_accounts::model::address::Address"
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(record_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => match item.unique_key() {
                            Some(key) if self.unique.contains_key(&key) => {
                                warn!(record_type, %key, "Duplicate key");
                                let _ = respond_to.send(Err(RecordError::Duplicate(key)));
                            }
                            key => {
                                if let Some(key) = key {
                                    self.unique.insert(key, id.clone());
                                }
                                self.store.insert(id.clone(), item);
                                self.order.push(id.clone());
                                info!(record_type, %id, size = self.store.len(), "Created");
                                let _ = respond_to.send(Ok(id));
                            }
                        },
                        Err(e) => {
                            warn!(record_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(RecordError::Rejected(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(record_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id))
                        .filter(|item| filter.as_ref().map_or(true, |keep| keep(*item)))
                        .cloned()
                        .collect();
                    debug!(record_type, count = items.len(), filtered = filter.is_some(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(record_type, %id, "Delete");
                    if let Some(item) = self.store.remove(&id) {
                        if let Some(key) = item.unique_key() {
                            self.unique.remove(&key);
                        }
                        self.order.retain(|existing| existing != &id);
                        info!(record_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(record_type, %id, "Not found");
                        let _ = respond_to.send(Err(RecordError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(record_type, size = self.store.len(), "Shutdown");
    }
}
