//! # Mocks & Testing Guide
//!
//! Two kinds of test doubles live here, one for each side of the actor.
//!
//! | Double | Replaces | Use Case |
//! |--------|----------|----------|
//! | [`MemoryStore`] | the JSON file | Testing the *real* actor without touching disk, including storage failures |
//! | [`create_mock_client`] | the actor | Testing logic *around* a client (error mapping, HTTP status codes) |
//!
//! ## Testing Strategies
//!
//! **Pattern 1: Real actor, memory store.** Spawn a `ResourceActor` over a `MemoryStore`,
//! drive it through a `ResourceClient`, then inspect `store.snapshot()`. Flip
//! `fail_loads` / `fail_saves` to exercise the [`FailurePolicy`](crate::framework::FailurePolicy).
//!
//! **Pattern 2: No actor.** `create_mock_client` hands back a client plus the receiver its
//! requests land on. The test pops a request with one of the `expect_*` helpers and answers
//! through the responder, so any reply (including errors the real actor can't easily
//! produce, like `ActorDropped`) can be simulated deterministically.
//!
//! ```rust
//! use products_api::framework::mock::{create_mock_client, expect_get};
//! use products_api::model::{Product, ProductId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client::<Product>(10);
//!     let task = tokio::spawn(async move { client.get(ProductId(1)).await });
//!
//!     let (id, responder) = expect_get(&mut receiver).await.unwrap();
//!     assert_eq!(id, ProductId(1));
//!     responder.send(Ok(None)).unwrap();
//!
//!     assert!(task.await.unwrap().unwrap().is_none());
//! }
//! ```
//!
//! **Pattern 3: Full system.** See `tests/http_api.rs`, which runs the real server on a
//! temp file and calls it over HTTP.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use crate::framework::store::{CollectionStore, StoreError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// MEMORY STORE
// =============================================================================

/// An in-memory [`CollectionStore`] with failure injection.
///
/// Clones share the same records and switches, so a test can keep one handle while the
/// actor owns another.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: Arc<Mutex<Vec<T>>>,
    fail_loads: Arc<AtomicBool>,
    fail_saves: Arc<AtomicBool>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            fail_loads: self.fail_loads.clone(),
            fail_saves: self.fail_saves.clone(),
        }
    }
}

impl<T: Clone> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> MemoryStore<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            fail_loads: Arc::new(AtomicBool::new(false)),
            fail_saves: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The records as last saved.
    pub fn snapshot(&self) -> Vec<T> {
        self.lock().clone()
    }

    /// Make every following `load` fail until switched off again.
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make every following `save` fail until switched off again.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<T> CollectionStore<T> for MemoryStore<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StoreError::Read {
                path: "memory".into(),
                source: io::Error::other("injected load failure"),
            });
        }
        Ok(self.snapshot())
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Write {
                path: "memory".into(),
                source: io::Error::other("injected save failure"),
            });
        }
        *self.lock() = records.to_vec();
        Ok(())
    }
}

// =============================================================================
// MOCK CLIENT HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When testing code that *uses* a client (e.g. `ProductClient` or an HTTP handler), we
/// don't need a real actor. The returned client sends into a channel the test controls;
/// the test inspects each request and answers it however the scenario requires.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
