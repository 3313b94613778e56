//! Canonical document types.
//!
//! [`CanonicalDocument`] is the output of the canonicalization pipeline:
//! normalized text, tokens with byte offsets, a version-aware identity hash,
//! and a snapshot of the configuration that produced it. For a fixed config
//! version and input text every field is deterministic on any machine.

use serde::{Deserialize, Serialize};

use crate::config::NormalizeConfig;
use crate::token::Token;

/// The canonical representation of one input document.
///
/// Read-only once produced; no downstream stage mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalDocument {
    /// Application-level document identifier, carried through for
    /// traceability.
    pub doc_id: String,

    /// Canonical text after stripping, masking, casing, and whitespace
    /// policies. May be empty for degenerate inputs.
    pub canonical_text: String,

    /// Token stream with UTF-8 byte offsets into `canonical_text`. Token
    /// index order defines the positions used by k-gram hashing.
    pub tokens: Vec<Token>,

    /// Version-aware identity hash:
    /// `SHA-256(version.to_be_bytes() || 0x00 || canonical_text_bytes)`.
    pub sha256_hex: String,

    /// Canonical configuration version used to produce this document.
    pub canonical_version: u32,

    /// Snapshot of the canonicalization configuration.
    pub config: NormalizeConfig,
}

impl CanonicalDocument {
    /// Number of tokens in the canonical text.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}
