// src/config.rs

//! Suite configuration: defaults, TOML loading and validation.
//!
//! The engine itself only reads two fields (`random_seed` is surfaced to
//! reporters, `fail_on_pending` affects the final success computation).
//! `shard_total`/`shard_index` are carried for the host, which applies them
//! via [`crate::collection::SpecCollection::trim_for_sharding`] before
//! handing the collection to the runner.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SpecrunError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Informational seed, echoed to reporters in the begin summary.
    pub random_seed: i64,
    /// Treat any pending spec as a suite failure (execution is unchanged;
    /// only the final success computation is affected).
    pub fail_on_pending: bool,
    /// Number of parallel shards the collection is split across.
    pub shard_total: usize,
    /// 1-based index of the shard this engine instance runs.
    pub shard_index: usize,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            random_seed: 0,
            fail_on_pending: false,
            shard_total: 1,
            shard_index: 1,
        }
    }
}

impl SuiteConfig {
    /// Check the sharding fields for basic sanity.
    ///
    /// The collection additionally treats an out-of-range trim as a no-op,
    /// but a host loading config from disk should fail fast instead.
    pub fn validate(&self) -> Result<()> {
        if self.shard_total == 0 {
            return Err(SpecrunError::ConfigError(
                "shard_total must be at least 1".to_string(),
            ));
        }
        if self.shard_index < 1 || self.shard_index > self.shard_total {
            return Err(SpecrunError::ConfigError(format!(
                "shard_index {} out of range 1..={}",
                self.shard_index, self.shard_total
            )));
        }
        Ok(())
    }
}

/// Load a [`SuiteConfig`] from a TOML file.
///
/// Missing fields fall back to their defaults via `#[serde(default)]`.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<SuiteConfig> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config: SuiteConfig = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a config file and run [`SuiteConfig::validate`].
///
/// This is the recommended entry point for hosts.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<SuiteConfig> {
    let config = load_from_path(path)?;
    config.validate()?;
    Ok(config)
}

/// Default config path in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Specrun.toml")
}
