//! Optional cross-request fingerprint cache.
//!
//! Keyed by a SHA-256 content hash of the raw document bytes plus the
//! parameters that shape the artifact. Concurrent readers share the lock;
//! on a racing miss the first completed insert wins and later writers adopt
//! its artifact, so a key is only ever populated once.
//!
//! Config fields that change behavior without changing `k`/`window` are
//! covered by the stage version numbers in the key: bumping the version on
//! behavior change is the canonicalization contract.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use canonical::{hash_raw_bytes, NormalizeConfig};
use fingerprint::{DocumentFingerprint, FingerprintConfig};

use crate::types::{CompareError, Document};

/// Cache key: raw-content identity plus the artifact-shaping parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    content_hash: String,
    canonical_version: u32,
    fingerprint_version: u32,
    k: usize,
    window: usize,
}

impl CacheKey {
    /// Build the key for one document under the given stage configs.
    pub fn for_document(
        document: &Document,
        canonical_cfg: &NormalizeConfig,
        fingerprint_cfg: &FingerprintConfig,
    ) -> Self {
        Self {
            content_hash: hash_raw_bytes(document.text.as_bytes()),
            canonical_version: canonical_cfg.version,
            fingerprint_version: fingerprint_cfg.version,
            k: fingerprint_cfg.k,
            window: fingerprint_cfg.window,
        }
    }
}

/// Shared fingerprint cache for cross-request reuse.
#[derive(Debug, Default)]
pub struct FingerprintCache {
    inner: RwLock<HashMap<CacheKey, Arc<DocumentFingerprint>>>,
}

impl FingerprintCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key without computing anything.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<DocumentFingerprint>> {
        let guard = self
            .inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.get(key).cloned()
    }

    /// Return the cached artifact for `key`, computing and inserting it on a
    /// miss. The computation runs outside the lock; if two callers race, the
    /// first insert wins and both receive the same artifact.
    pub fn get_or_insert_with<F>(
        &self,
        key: CacheKey,
        compute: F,
    ) -> Result<Arc<DocumentFingerprint>, CompareError>
    where
        F: FnOnce() -> Result<DocumentFingerprint, CompareError>,
    {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }

        let computed = Arc::new(compute()?);

        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(guard.entry(key).or_insert(computed).clone())
    }

    /// Number of cached artifacts.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached artifact.
    pub fn clear(&self) {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}
