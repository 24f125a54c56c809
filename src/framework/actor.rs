//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the single writer in front of a persisted
//! collection. It implements the "Server" side of the Actor Model: requests arrive over a
//! channel and are handled one at a time, each as a complete load-modify-save cycle.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use crate::framework::store::{CollectionStore, FailurePolicy};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns access to one persisted collection.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the store handle and the
/// receiver end of the channel. It keeps *no* records in memory between requests: every
/// request starts with a fresh `load`, and every mutation ends with a full `save`.
///
/// **Concurrency Model**:
/// Requests are processed *sequentially* in [`run`](Self::run), including the awaits on
/// storage I/O. Two overlapping HTTP requests therefore cannot both load the same
/// snapshot; the second one sees the first one's save. Reads go through the same queue,
/// so they observe either the state before or after a write, never the middle of one.
///
/// # Operations
///
/// * **List**: load, return all records in stored order.
/// * **Get**: load, linear scan by id.
/// * **Create**: load, allocate `T::next_id`, build the record, append, save.
/// * **Update**: load, find, apply `on_update`, save.
/// * **Delete**: load, find, remove (order of the rest is kept), save.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Box<dyn CollectionStore<T>>,
    policy: FailurePolicy,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `store` - Where the collection lives.
    /// * `policy` - Whether storage failures are reported or swallowed.
    pub fn new(
        buffer_size: usize,
        store: impl CollectionStore<T> + 'static,
        policy: FailurePolicy,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // Extract just the type name (e.g., "Product" instead of "products_api::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            store: Box::new(store),
            policy,
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        let entity_type = self.entity_type;
        info!(entity_type, policy = ?self.policy, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(self.list().await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(self.get(id).await);
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.create(params).await);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let _ = respond_to.send(self.update(id, update).await);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let _ = respond_to.send(self.delete(id).await);
                }
            }
        }

        info!(entity_type, "Shutdown");
    }

    async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let records = self.load().await?;
        debug!(entity_type = self.entity_type, size = records.len(), "List");
        Ok(records)
    }

    async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let records = self.load().await?;
        let item = Self::find(&records, id).cloned();
        debug!(entity_type = self.entity_type, %id, found = item.is_some(), "Get");
        Ok(item)
    }

    async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        let mut records = self.load().await?;
        let item = T::next_id(&records)
            .and_then(|id| T::from_create_params(id, params))
            .map_err(|e| {
                warn!(entity_type, error = %e, "Create failed");
                FrameworkError::EntityError(Box::new(e))
            })?;
        let id = item.id();

        records.push(item.clone());
        self.save(&records).await?;
        info!(entity_type, %id, size = records.len(), "Created");
        Ok(item)
    }

    async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        let mut records = self.load().await?;
        let Some(index) = Self::find_index(&records, id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        let item = &mut records[index];
        if let Err(e) = item.on_update(update) {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        let updated = item.clone();

        self.save(&records).await?;
        info!(entity_type, %id, "Updated");
        Ok(updated)
    }

    async fn delete(&self, id: T::Id) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        let mut records = self.load().await?;
        let Some(index) = Self::find_index(&records, id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        let removed = records.remove(index);
        self.save(&records).await?;
        info!(entity_type, %id, size = records.len(), "Deleted");
        Ok(removed)
    }

    /// Position of the record with `id`, by linear scan.
    pub fn find_index(records: &[T], id: T::Id) -> Option<usize> {
        records.iter().position(|r| r.id() == id)
    }

    /// The record with `id`, by linear scan.
    pub fn find(records: &[T], id: T::Id) -> Option<&T> {
        records.iter().find(|r| r.id() == id)
    }

    async fn load(&self) -> Result<Vec<T>, FrameworkError> {
        match self.store.load().await {
            Ok(records) => Ok(records),
            Err(e) => match self.policy {
                FailurePolicy::Strict => {
                    warn!(entity_type = self.entity_type, error = %e, "Load failed");
                    Err(FrameworkError::Storage(e))
                }
                FailurePolicy::Lenient => {
                    warn!(entity_type = self.entity_type, error = %e, "Load failed, using empty collection");
                    Ok(Vec::new())
                }
            },
        }
    }

    async fn save(&self, records: &[T]) -> Result<(), FrameworkError> {
        match self.store.save(records).await {
            Ok(()) => Ok(()),
            Err(e) => match self.policy {
                FailurePolicy::Strict => {
                    warn!(entity_type = self.entity_type, error = %e, "Save failed");
                    Err(FrameworkError::Storage(e))
                }
                FailurePolicy::Lenient => {
                    warn!(entity_type = self.entity_type, error = %e, "Save failed, change not persisted");
                    Ok(())
                }
            },
        }
    }
}
