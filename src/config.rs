//! YAML configuration file support.
//!
//! All stage configurations (canonical, fingerprint, risk policy) can live
//! in a single YAML file and be loaded at runtime. Every section and every
//! field is optional; omitted values take the stage defaults.
//!
//! ## Example
//!
//! ```yaml
//! canonical:
//!   version: 1
//!   strip_comments: true
//!   strip_string_literals: true
//!   lowercase: true
//!
//! fingerprint:
//!   version: 1
//!   k: 30
//!   window: 25
//!
//! policy:
//!   high: 70.0
//!   moderate: 40.0
//!
//! use_parallel: false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use canonical::NormalizeConfig;
use fingerprint::FingerprintConfig;
use matcher::RiskPolicy;

/// Combined configuration for the full pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CodefpConfig {
    /// Canonicalization settings.
    pub canonical: NormalizeConfig,
    /// K-gram hashing and winnowing settings.
    pub fingerprint: FingerprintConfig,
    /// Caller-side score classification thresholds; consumed by the CLI,
    /// never by the similarity computation.
    pub policy: RiskPolicy,
    /// Fan batches out across the rayon pool.
    pub use_parallel: bool,
}

impl CodefpConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration from a YAML file on disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }
}

/// Errors that can occur when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}
