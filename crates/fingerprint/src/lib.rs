//! # codefp fingerprint stage
//!
//! Turns a canonical token stream into a compact, similarity-preserving set
//! of fingerprints. The stage **only** consumes canonical tokens produced by
//! the upstream canonicalization pipeline; it never normalizes, tokenizes,
//! or performs I/O. For the same token sequence and the same
//! [`FingerprintConfig`] the output is bit-identical on any machine.
//!
//! ## Pipeline
//!
//! 1. **K-gram hashing**: every window of `k` consecutive tokens is hashed
//!    with a base-257 polynomial in wrapping u32 arithmetic, maintained
//!    incrementally as the window slides.
//! 2. **Winnowing**: a sliding window of `window` consecutive k-gram hashes
//!    selects its minimum (leftmost on ties), deduplicated by
//!    `(hash, position)`. Any sufficiently long region shared between two
//!    documents is guaranteed to contribute at least one common selection.
//! 3. **Set extraction**: the distinct hash values are collected into a
//!    sorted set for Jaccard comparison, while the position-aware selection
//!    list is kept for counts and diagnostics.
//!
//! ## Example
//!
//! ```
//! use fingerprint::{fingerprint_tokens, FingerprintConfig};
//!
//! let tokens = ["a", "b", "c", "d", "e", "f", "g", "h"];
//! let cfg = FingerprintConfig::new().with_k(3).with_window(2);
//!
//! let artifact = fingerprint_tokens(&tokens, &cfg).unwrap();
//! assert!(!artifact.is_empty());
//! assert_eq!(artifact.meta.k, 3);
//! ```

mod config;
mod fingerprint;
mod kgram;
mod winnow;

pub use crate::config::{FingerprintConfig, FingerprintError};
pub use crate::fingerprint::{DocumentFingerprint, Fingerprint, FingerprintMeta};
pub use crate::kgram::{kgram_hashes, KGramHash, HASH_BASE};
pub use crate::winnow::winnow;

/// Current fingerprint algorithm version for this crate.
pub const FINGERPRINT_VERSION: u16 = 1;

/// Human-readable algorithm identifier.
pub const FINGERPRINT_ALGORITHM: &str = "kgram-winnow_v1";

/// Compute a document fingerprint (k-gram hashes → winnow → hash set).
///
/// `tokens` must contain canonical tokens in their original order. A stream
/// with fewer than `cfg.k` tokens produces an empty artifact; the only error
/// path is configuration validation.
pub fn fingerprint_tokens<S>(
    tokens: &[S],
    cfg: &FingerprintConfig,
) -> Result<DocumentFingerprint, FingerprintError>
where
    S: AsRef<str>,
{
    cfg.validate()?;

    let mut kgrams = kgram_hashes(tokens, cfg.k, cfg.include_kgrams);
    let fingerprints = winnow(&kgrams, cfg.window);

    let mut hash_set: Vec<u32> = Vec::with_capacity(fingerprints.len());
    hash_set.extend(fingerprints.iter().map(|f| f.hash));
    hash_set.sort_unstable();
    hash_set.dedup();

    let meta = FingerprintMeta {
        algorithm_version: FINGERPRINT_VERSION,
        algorithm_name: FINGERPRINT_ALGORITHM.to_string(),
        k: cfg.k,
        window: cfg.window,
        token_count: tokens.len(),
        kgram_count: kgrams.len(),
        config_version: cfg.version,
    };

    if !cfg.include_kgrams {
        kgrams.clear();
    }

    Ok(DocumentFingerprint {
        kgrams,
        fingerprints,
        hash_set,
        meta,
    })
}
