pub mod file;
pub(crate) mod keys;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Namespaced key-value persistence for whole-collection snapshots.
///
/// The service reads and writes one serialized array per logical collection;
/// absence of a key means "fall back to the bundled fixture". Implementations
/// are the crate's stand-in for the browser's local storage, so values are
/// opaque strings and there is no locking across a read-modify-write cycle.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
    async fn keys(&self) -> Result<Vec<String>, StoreError>;
}
