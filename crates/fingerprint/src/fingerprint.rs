//! Fingerprint artifact types.
//!
//! The artifact keeps two views of the same selection: the ordered,
//! position-aware fingerprint list (counts, diagnostics, region reporting)
//! and the deduplicated hash set that similarity estimation consumes. The
//! two are deliberately not merged.

use serde::{Deserialize, Serialize};

use crate::kgram::KGramHash;

/// One selected k-gram: its hash and the starting token position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fingerprint {
    /// Hash value, wrapping modulo 2^32.
    pub hash: u32,
    /// Starting token index of the selected k-gram.
    pub position: usize,
}

/// Final fingerprint artifact for one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentFingerprint {
    /// Diagnostic k-gram list; retained only when the config asks for it.
    pub kgrams: Vec<KGramHash>,
    /// Winnowed selections in selection order, positions intact.
    pub fingerprints: Vec<Fingerprint>,
    /// Distinct fingerprint hash values, sorted ascending. This is the set
    /// similarity is computed over.
    pub hash_set: Vec<u32>,
    /// How and with which configuration the artifact was produced.
    pub meta: FingerprintMeta,
}

impl DocumentFingerprint {
    /// Number of selected fingerprints (the reporting count).
    pub fn count(&self) -> usize {
        self.fingerprints.len()
    }

    /// True when the document was too short to produce any fingerprint.
    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }
}

/// Metadata for traceability and determinism.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintMeta {
    /// Fingerprint algorithm version; bumped whenever the effective
    /// algorithm (hashing, winnowing, selection) changes.
    pub algorithm_version: u16,
    /// Human-readable algorithm identifier.
    pub algorithm_name: String,
    /// K-gram size in tokens.
    pub k: usize,
    /// Winnowing window size.
    pub window: usize,
    /// Tokens seen in the input stream.
    pub token_count: usize,
    /// K-gram hashes produced before winnowing.
    pub kgram_count: usize,
    /// Configuration schema version supplied by the caller.
    pub config_version: u32,
}
