pub mod core;
pub mod fixtures;
pub mod models;
pub mod service;
pub mod store;

#[cfg(test)]
mod test_support;

pub use crate::core::config::{ConfigError, Settings};
pub use crate::service::errors::ServiceError;
pub use crate::service::MockService;
pub use crate::store::{FileStore, MemoryStore, SnapshotStore, StoreError};
