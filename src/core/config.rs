use std::env;

use thiserror::Error;

pub(crate) const DEFAULT_LATENCY_MIN_MS: u64 = 200;
pub(crate) const DEFAULT_LATENCY_MAX_MS: u64 = 1200;
pub(crate) const DEFAULT_FAILURE_RATE: f64 = 0.05;
pub(crate) const DEFAULT_NAMESPACE: &str = "eduindia";

#[derive(Debug, Clone)]
pub struct Settings {
    network: NetworkSettings,
    storage: StorageSettings,
    telemetry: TelemetrySettings,
}

#[derive(Debug, Clone)]
pub struct NetworkSettings {
    pub latency_min_ms: u64,
    pub latency_max_ms: u64,
    pub failure_rate: f64,
    pub offline: bool,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub namespace: String,
    pub data_dir: String,
}

#[derive(Debug, Clone)]
pub struct TelemetrySettings {
    pub log_level: String,
    pub json: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
    #[error("failure rate must be within [0, 1], got {0}")]
    InvalidFailureRate(f64),
    #[error("latency bounds inverted: min {min}ms > max {max}ms")]
    InvertedLatency { min: u64, max: u64 },
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let latency_min_ms = parse_u64(
            "EDUINDIA_LATENCY_MIN_MS",
            env_or_default("EDUINDIA_LATENCY_MIN_MS", "200"),
        )?;
        let latency_max_ms = parse_u64(
            "EDUINDIA_LATENCY_MAX_MS",
            env_or_default("EDUINDIA_LATENCY_MAX_MS", "1200"),
        )?;
        let failure_rate =
            parse_f64("EDUINDIA_FAILURE_RATE", env_or_default("EDUINDIA_FAILURE_RATE", "0.05"))?;
        let offline =
            env_optional("EDUINDIA_OFFLINE").map(|value| parse_bool(&value)).unwrap_or(false);

        let namespace = env_or_default("EDUINDIA_NAMESPACE", DEFAULT_NAMESPACE);
        let data_dir = env_or_default("EDUINDIA_DATA_DIR", "./data");

        let log_level = env_or_default("EDUINDIA_LOG_LEVEL", "info");
        let json =
            env_optional("EDUINDIA_LOG_JSON").map(|value| parse_bool(&value)).unwrap_or(false);

        let settings = Self {
            network: NetworkSettings { latency_min_ms, latency_max_ms, failure_rate, offline },
            storage: StorageSettings { namespace, data_dir },
            telemetry: TelemetrySettings { log_level, json },
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn network(&self) -> &NetworkSettings {
        &self.network
    }

    pub fn storage(&self) -> &StorageSettings {
        &self.storage
    }

    pub fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.network.failure_rate) {
            return Err(ConfigError::InvalidFailureRate(self.network.failure_rate));
        }
        if self.network.latency_min_ms > self.network.latency_max_ms {
            return Err(ConfigError::InvertedLatency {
                min: self.network.latency_min_ms,
                max: self.network.latency_max_ms,
            });
        }
        if self.storage.namespace.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "EDUINDIA_NAMESPACE",
                value: String::from("<empty>"),
            });
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            network: NetworkSettings {
                latency_min_ms: DEFAULT_LATENCY_MIN_MS,
                latency_max_ms: DEFAULT_LATENCY_MAX_MS,
                failure_rate: DEFAULT_FAILURE_RATE,
                offline: false,
            },
            storage: StorageSettings {
                namespace: DEFAULT_NAMESPACE.to_string(),
                data_dir: "./data".to_string(),
            },
            telemetry: TelemetrySettings { log_level: "info".to_string(), json: false },
        }
    }
}

fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

fn env_or_default(key: &str, default: &str) -> String {
    env_optional(key).unwrap_or_else(|| default.to_string())
}

fn parse_u64(field: &'static str, value: String) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| ConfigError::InvalidValue { field, value })
}

fn parse_f64(field: &'static str, value: String) -> Result<f64, ConfigError> {
    value.parse::<f64>().map_err(|_| ConfigError::InvalidValue { field, value })
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "1" | "true" | "TRUE" | "yes" | "YES")
}
