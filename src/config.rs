//! Worker configuration
//!
//! TOML-backed configuration for the worker process. Everything has a
//! default, so the worker runs without a file; a file only overrides. The
//! protocol surface itself (route, precision ceiling) is fixed and
//! deliberately not configurable.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Top-level worker configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkerConfig {
    #[serde(default)]
    pub worker: WorkerSection,
    #[serde(default)]
    pub limits: LimitsSection,
}

/// Identity of this worker instance, used in logs only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkerSection {
    /// Worker identifier (must match [a-zA-Z0-9._-]+)
    #[serde(default = "default_worker_id")]
    pub id: String,
    /// Description of what this worker does
    #[serde(default)]
    pub description: String,
}

/// Advisory limits. None of these reject requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitsSection {
    /// Arbitrary-precision requests above this `n` are logged as a warning.
    /// There is no hard cap and no cancellation; the gap is documented, not
    /// silently papered over.
    #[serde(default = "default_warn_above")]
    pub warn_above: u64,
}

fn default_worker_id() -> String {
    "fibworker".to_string()
}

fn default_warn_above() -> u64 {
    1_000_000
}

impl Default for WorkerSection {
    fn default() -> Self {
        Self {
            id: default_worker_id(),
            description: String::new(),
        }
    }
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            warn_above: default_warn_above(),
        }
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            worker: WorkerSection::default(),
            limits: LimitsSection::default(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

impl WorkerConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: WorkerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker.id.is_empty() {
            return Err(ConfigError::Validation(
                "worker.id must not be empty".to_string(),
            ));
        }

        let valid_id = self
            .worker
            .id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid_id {
            return Err(ConfigError::Validation(format!(
                "worker.id '{}' must match [a-zA-Z0-9._-]+",
                self.worker.id
            )));
        }

        Ok(())
    }

    /// Configuration used by unit and integration tests.
    pub fn test_config() -> Self {
        Self {
            worker: WorkerSection {
                id: "test-worker".to_string(),
                description: "Fibonacci worker under test".to_string(),
            },
            limits: LimitsSection::default(),
        }
    }
}
