//! Root scheduler configuration and loading.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::DirectoryConfig;
use crate::core::{AppResult, ArrivalIndex};

/// Environment variable naming a JSON configuration file.
pub const CONFIG_PATH_ENV: &str = "TRIAGE_DISPATCH_CONFIG";

/// Largest accepted `first_arrival_index`; keeps half the index space free.
pub const MAX_FIRST_ARRIVAL_INDEX: ArrivalIndex = ArrivalIndex::MAX / 2;

const fn default_audit_capacity() -> usize {
    256
}

/// Root scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// First arrival index handed out by the sequencer.
    #[serde(default)]
    pub first_arrival_index: ArrivalIndex,
    /// Bounded audit buffer size; `0` disables auditing.
    #[serde(default = "default_audit_capacity")]
    pub audit_capacity: usize,
    /// Resource routing table.
    #[serde(default)]
    pub directory: DirectoryConfig,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            first_arrival_index: 0,
            audit_capacity: default_audit_capacity(),
            directory: DirectoryConfig::default(),
        }
    }
}

impl SchedulerConfig {
    /// Validate the arrival offset and the directory table.
    pub fn validate(&self) -> Result<(), String> {
        if self.first_arrival_index > MAX_FIRST_ARRIVAL_INDEX {
            return Err(format!(
                "first_arrival_index {} leaves no headroom (max {MAX_FIRST_ARRIVAL_INDEX})",
                self.first_arrival_index
            ));
        }
        self.directory
            .validate()
            .map_err(|e| format!("directory invalid: {e}"))
    }

    /// Parse scheduler configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json_str(&raw)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("loading config file {}", path.display()))
    }

    /// Load `.env`, then the file named by [`CONFIG_PATH_ENV`] if set,
    /// falling back to the built-in table.
    pub fn load() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e).context("reading .env");
            }
        }
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                tracing::info!(%path, "loading scheduler config");
                Self::from_file(path)
            }
            Err(_) => {
                tracing::debug!("no config file set, using built-in directory");
                Ok(Self::default())
            }
        }
    }
}
