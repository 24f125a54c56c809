//! # Collection Storage
//!
//! The durable side of the framework. A [`CollectionStore`] reads and writes a *whole*
//! collection at once; there is no partial update and no index. The actor calls `load`
//! before every operation and `save` after every mutation, so the store itself holds no
//! state between requests.
//!
//! - [`JsonFileStore`] persists the collection as one pretty-printed JSON array.
//! - [`MemoryStore`](crate::framework::mock::MemoryStore) keeps it in memory for tests.
//!
//! What the actor does when a store call fails is decided by [`FailurePolicy`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Errors raised by a [`CollectionStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialize collection: {0}")]
    Serialize(serde_json::Error),
}

impl StoreError {
    /// True for failures that happened while loading the collection.
    pub fn is_read(&self) -> bool {
        matches!(self, StoreError::Read { .. } | StoreError::Parse { .. })
    }
}

/// How the actor reacts to a failed `load` or `save`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Storage failures are returned to the caller as [`FrameworkError::Storage`].
    ///
    /// [`FrameworkError::Storage`]: crate::framework::FrameworkError::Storage
    #[default]
    Strict,
    /// Storage failures are logged and swallowed: a failed load reads as an empty
    /// collection, a failed save still reports success.
    Lenient,
}

/// Whole-collection persistence.
#[async_trait]
pub trait CollectionStore<T>: Send + Sync
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Read the full collection.
    async fn load(&self) -> Result<Vec<T>, StoreError>;

    /// Replace the persisted collection with `records`.
    async fn save(&self, records: &[T]) -> Result<(), StoreError>;
}

/// A collection stored as a JSON array in a single file.
///
/// A missing or blank file is an empty collection. Writes go to a sibling `*.tmp` file
/// which is then renamed over the target, so a concurrent reader of the file never sees
/// half a document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl<T> CollectionStore<T> for JsonFileStore
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No collection file, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(records).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, body).await.map_err(|e| self.write_error(e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.write_error(e))?;

        debug!(path = %self.path.display(), size = records.len(), "Collection saved");
        Ok(())
    }
}
