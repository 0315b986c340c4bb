//! # Generic Client
//!
//! The cloneable handle used to send requests to a [`ResourceActor`](crate::ResourceActor).

use crate::entity::StoredRecord;
use crate::error::RecordError;
use crate::message::{Filter, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only the channel sender, so cloning is cheap. Every method resolves to
/// `Result<_, RecordError>`; a closed actor surfaces as [`RecordError::ActorClosed`].
pub struct ResourceClient<T: StoredRecord> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: StoredRecord> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StoredRecord> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, RecordError>>) -> ResourceRequest<T>,
    ) -> Result<R, RecordError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| RecordError::ActorClosed)?;
        response.await.map_err(|_| RecordError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, RecordError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, RecordError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Every record, in insertion order.
    pub async fn list(&self) -> Result<Vec<T>, RecordError> {
        self.request(|respond_to| ResourceRequest::List {
            filter: None,
            respond_to,
        })
        .await
    }

    /// Records matching `predicate`, in insertion order.
    pub async fn find(
        &self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<T>, RecordError> {
        let filter: Filter<T> = Box::new(predicate);
        self.request(|respond_to| ResourceRequest::List {
            filter: Some(filter),
            respond_to,
        })
        .await
    }

    /// Records whose [`StoredRecord::owner`] equals `owner`.
    pub async fn list_owned_by(&self, owner: &str) -> Result<Vec<T>, RecordError> {
        let owner = owner.to_string();
        self.find(move |item| item.owner() == Some(owner.as_str()))
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), RecordError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn count(&self) -> Result<usize, RecordError> {
        self.request(|respond_to| ResourceRequest::Count { respond_to })
            .await
    }

    /// True once the actor has stopped receiving.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
