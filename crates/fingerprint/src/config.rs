//! Configuration and error types for fingerprint generation.
//!
//! The fingerprint stage is a pure function of `(canonical_tokens, config)`:
//! no I/O, no clocks, no global state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic configuration for k-gram hashing and winnowing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FingerprintConfig {
    /// Configuration schema version. Any algorithmic change that can affect
    /// fingerprints must bump this so old artifacts stay comparable.
    pub version: u32,
    /// Number of tokens per k-gram.
    ///
    /// Controls the length of the shortest match the fingerprints can
    /// witness. Larger values are more precise but miss shorter overlaps.
    pub k: usize,
    /// Winnowing window size, in consecutive k-gram hashes.
    ///
    /// Larger windows select fewer fingerprints (expected density is about
    /// `2 / (window + 1)` per k-gram for well-distributed hashes).
    pub window: usize,
    /// Retain the k-gram list (with its joined text) in the artifact for
    /// diagnostics. Off by default; the k-grams are always computed
    /// internally but dropped to keep artifacts compact.
    pub include_kgrams: bool,
}

impl FingerprintConfig {
    /// Create a new configuration with the standard defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the k-gram size. Must be >= 1.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the winnowing window size. Must be >= 1.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Retain or drop the diagnostic k-gram list in the artifact.
    pub fn with_kgrams(mut self, include_kgrams: bool) -> Self {
        self.include_kgrams = include_kgrams;
        self
    }

    /// Validate configuration parameters. Called before any processing;
    /// failure here is the only error path in the stage.
    pub fn validate(&self) -> Result<(), FingerprintError> {
        if self.version < 1 {
            return Err(FingerprintError::InvalidConfigVersion {
                version: self.version,
            });
        }
        if self.k < 1 {
            return Err(FingerprintError::InvalidConfigK { k: self.k });
        }
        if self.window < 1 {
            return Err(FingerprintError::InvalidConfigWindow {
                window: self.window,
            });
        }
        Ok(())
    }
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            version: 1,
            k: 30,
            window: 25,
            include_kgrams: false,
        }
    }
}

/// Errors returned by the fingerprint stage.
///
/// Short token sequences are not represented here: fewer than `k` tokens
/// yields an empty artifact, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    #[error("invalid config: k must be >= 1 (got {k})")]
    InvalidConfigK { k: usize },

    #[error("invalid config: window must be >= 1 (got {window})")]
    InvalidConfigWindow { window: usize },

    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },
}
