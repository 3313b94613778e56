//! Hashing utilities for the canonical text pipeline.
//!
//! Canonical identity hashes include the configuration version so that
//! behavior changes never silently collide with hashes produced under an
//! older version:
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || canonical_text_bytes)
//! ```

use sha2::{Digest, Sha256};

/// Hash arbitrary raw bytes with SHA-256 and return a hex digest.
///
/// Version-agnostic; used for content-addressed cache keys over the raw
/// document bytes. For canonical identity hashes use
/// [`hash_canonical_bytes`].
pub fn hash_raw_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Compute the version-aware identity hash for canonical text.
///
/// The `0x00` discriminator byte keeps document hashes disjoint from any
/// future keyed-hash family sharing the version prefix.
pub fn hash_canonical_bytes(canonical_version: u32, canonical_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_version.to_be_bytes());
    hasher.update([0]);
    hasher.update(canonical_bytes);
    hex::encode(hasher.finalize())
}
