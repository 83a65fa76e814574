pub mod accounts;
pub mod assignments;
pub mod courses;
pub mod errors;
pub mod lessons;
pub mod live_classes;
pub mod notifications;
pub mod students;

#[cfg(test)]
mod tests;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::config::Settings;
use crate::service::errors::ServiceError;
use crate::store::{keys, SnapshotStore};

/// Mutable simulation profile shared by every call on one service instance.
#[derive(Debug, Clone, Copy)]
struct NetworkProfile {
    latency_min_ms: u64,
    latency_max_ms: u64,
    failure_rate: f64,
    offline: bool,
}

/// Async facade over locally persisted snapshot collections, mimicking a
/// remote API: every data call waits a random latency and may be rejected
/// with a simulated network failure. One instance per process (or per test).
pub struct MockService {
    store: Arc<dyn SnapshotStore>,
    namespace: String,
    profile: Mutex<NetworkProfile>,
}

impl MockService {
    /// Builds a service over `store`. A persisted offline flag from a previous
    /// session takes precedence over the configured default.
    pub async fn open(
        store: Arc<dyn SnapshotStore>,
        settings: &Settings,
    ) -> Result<Self, ServiceError> {
        let namespace = settings.storage().namespace.clone();
        let network = settings.network();

        let offline_key = keys::namespaced(&namespace, keys::OFFLINE_MODE);
        let offline = match store.get(&offline_key).await? {
            Some(value) => value == "true",
            None => network.offline,
        };

        Ok(Self {
            store,
            namespace,
            profile: Mutex::new(NetworkProfile {
                latency_min_ms: network.latency_min_ms,
                latency_max_ms: network.latency_max_ms,
                failure_rate: network.failure_rate,
                offline,
            }),
        })
    }

    // --- simulation configuration ---

    pub fn set_latency(&self, min_ms: u64, max_ms: u64) {
        let mut profile = self.lock_profile();
        profile.latency_min_ms = min_ms.min(max_ms);
        profile.latency_max_ms = max_ms.max(min_ms);
    }

    pub fn set_failure_rate(&self, rate: f64) {
        self.lock_profile().failure_rate = rate.clamp(0.0, 1.0);
    }

    pub async fn simulate_offline(&self, offline: bool) -> Result<(), ServiceError> {
        self.lock_profile().offline = offline;
        let key = self.key(keys::OFFLINE_MODE);
        self.store.set(&key, if offline { "true" } else { "false" }).await?;
        tracing::info!(offline, "offline mode toggled");
        Ok(())
    }

    pub fn is_offline(&self) -> bool {
        self.lock_profile().offline
    }

    // --- debug helpers ---

    /// Clears all persisted collections so the next reads repopulate from the
    /// bundled fixtures. Session, theme, language and the offline flag are
    /// kept. Safe to call repeatedly.
    pub async fn reset_mock_data(&self) -> Result<(), ServiceError> {
        for name in keys::RESETTABLE {
            let key = self.key(name);
            self.store.remove(&key).await?;
        }
        tracing::info!("mock data reset to bundled fixtures");
        Ok(())
    }

    /// Total size of all namespaced values, formatted like the web client's
    /// cache indicator.
    pub async fn cache_size(&self) -> Result<String, ServiceError> {
        let prefix = format!("{}_", self.namespace);
        let mut total = 0usize;
        for key in self.store.keys().await? {
            if !key.starts_with(&prefix) {
                continue;
            }
            if let Some(value) = self.store.get(&key).await? {
                total += value.len();
            }
        }
        Ok(format_kb(total as u64))
    }

    // --- internals shared by the resource modules ---

    fn lock_profile(&self) -> std::sync::MutexGuard<'_, NetworkProfile> {
        self.profile.lock().expect("network profile poisoned")
    }

    pub(crate) fn key(&self, name: &str) -> String {
        keys::namespaced(&self.namespace, name)
    }

    /// The uniform failure gate: offline rejects immediately with no delay,
    /// otherwise wait a uniform random latency and roll for a simulated
    /// failure. Runs before every data-returning operation.
    pub(crate) async fn gate(&self) -> Result<(), ServiceError> {
        let profile = *self.lock_profile();
        if profile.offline {
            return Err(ServiceError::Offline);
        }

        let millis = {
            // ThreadRng is not Send; sample before suspending.
            let mut rng = rand::thread_rng();
            rng.gen_range(profile.latency_min_ms..=profile.latency_max_ms)
        };
        if millis > 0 {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }

        let roll: f64 = rand::thread_rng().gen();
        if roll < profile.failure_rate {
            return Err(ServiceError::RequestFailed);
        }
        Ok(())
    }

    /// Layered snapshot read: persisted copy if present, else seed from the
    /// bundled default and persist that seed. A corrupt snapshot falls back
    /// to the seed without overwriting it.
    pub(crate) async fn collection<T, F>(
        &self,
        name: &'static str,
        seed: F,
    ) -> Result<Vec<T>, ServiceError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<Vec<T>, serde_json::Error>,
    {
        let key = self.key(name);
        match self.store.get(&key).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => Ok(items),
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "corrupt snapshot, using bundled data");
                    seed().map_err(|source| ServiceError::Corrupt { key, source })
                }
            },
            None => {
                let seeded =
                    seed().map_err(|source| ServiceError::Corrupt { key: key.clone(), source })?;
                self.persist(name, &seeded).await?;
                Ok(seeded)
            }
        }
    }

    /// Writes a full collection snapshot back. There is no delta persistence
    /// and no locking across the read-modify-write cycle; concurrent writers
    /// to the same collection are last-write-wins by contract.
    pub(crate) async fn persist<T: Serialize>(
        &self,
        name: &'static str,
        items: &[T],
    ) -> Result<(), ServiceError> {
        let key = self.key(name);
        let raw = serde_json::to_string(items)
            .map_err(|source| ServiceError::Corrupt { key: key.clone(), source })?;
        self.store.set(&key, &raw).await?;
        Ok(())
    }
}

pub(crate) fn format_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

pub(crate) fn format_mb(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}
