use thiserror::Error;

use crate::store::StoreError;

/// Simulated-network failure surface. "Not found" is never an error here:
/// lookups return `None` and merges on an unknown id are silent no-ops.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Simulated offline mode is active; raised before any latency wait.
    #[error("Network unavailable - working offline")]
    Offline,
    /// The random failure roll triggered after the latency wait.
    #[error("Network request failed")]
    RequestFailed,
    #[error(transparent)]
    Storage(#[from] StoreError),
    #[error("corrupt data for {key}: {source}")]
    Corrupt { key: String, source: serde_json::Error },
}

impl ServiceError {
    /// Whether the caller may usefully retry (the UI shows a retry button for
    /// these; the service itself never retries).
    pub fn is_transient(&self) -> bool {
        matches!(self, ServiceError::Offline | ServiceError::RequestFailed)
    }
}
