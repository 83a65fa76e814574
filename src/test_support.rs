use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::core::config::Settings;
use crate::service::MockService;
use crate::store::MemoryStore;

/// Serializes tests that touch process environment variables.
pub(crate) async fn env_lock() -> OwnedMutexGuard<()> {
    static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
    let lock = LOCK.get_or_init(|| Arc::new(Mutex::new(()))).clone();
    lock.lock_owned().await
}

pub(crate) fn clear_settings_env() {
    for key in [
        "EDUINDIA_LATENCY_MIN_MS",
        "EDUINDIA_LATENCY_MAX_MS",
        "EDUINDIA_FAILURE_RATE",
        "EDUINDIA_OFFLINE",
        "EDUINDIA_NAMESPACE",
        "EDUINDIA_DATA_DIR",
        "EDUINDIA_LOG_LEVEL",
        "EDUINDIA_LOG_JSON",
    ] {
        std::env::remove_var(key);
    }
}

/// Fresh unique directory under the system temp dir for file-store tests.
pub(crate) fn scratch_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("eduindia-{tag}-{}", Uuid::new_v4()))
}

/// Service over a fresh in-memory store with zero latency and zero failure
/// rate, so tests only exercise the data semantics.
pub(crate) async fn instant_service() -> MockService {
    let service = MockService::open(Arc::new(MemoryStore::new()), &Settings::default())
        .await
        .expect("mock service");
    service.set_latency(0, 0);
    service.set_failure_rate(0.0);
    service
}
