//! Configuration for the canonical text pipeline.
//!
//! The `version` field is critical for determinism: any change to
//! canonicalization behavior (even bug fixes) must be accompanied by a
//! version bump so that old canonical texts and their hashes remain
//! reproducible. Version 0 is reserved and rejected.

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the canonical text pipeline.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configuration files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Semantic version of the canonicalization behavior. Included in every
    /// identity hash; must be >= 1.
    pub version: u32,

    /// If true, remove line comments (`//…`) and block comments (`/*…*/`)
    /// before any other transform.
    pub strip_comments: bool,

    /// If true, remove the bodies of single- and double-quoted string
    /// literals. Escape sequences are not interpreted; an unterminated
    /// literal is stripped to the end of input (best effort, never an error).
    pub strip_string_literals: bool,

    /// If true, apply Unicode NFKC normalization before tokenization so that
    /// visually equivalent inputs canonicalize identically.
    pub normalize_unicode: bool,

    /// If true, lowercase the canonical text (locale-free Unicode mapping).
    pub lowercase: bool,
}

impl NormalizeConfig {
    /// Reject reserved configuration versions before any processing.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            strip_comments: true,
            strip_string_literals: true,
            normalize_unicode: true,
            lowercase: true,
        }
    }
}
