//! Umbrella crate for codefp: content fingerprinting and near-duplicate
//! detection over source text.
//!
//! This crate stitches together canonicalization, fingerprint generation,
//! and batch comparison so callers can go from raw document text to a
//! similarity matrix with a single call. The stages remain available as
//! standalone crates (`canonical`, `fingerprint`, `matcher`) for callers
//! that need finer control.
//!
//! The engine boundary is deliberately narrow: an ordered collection of
//! `(document_id, raw_text)` pairs in, per-document fingerprint counts plus
//! an N×N similarity matrix out. Document acquisition (files, decoding)
//! happens before the engine runs, and rendering of the returned structures
//! happens after; neither belongs to the core.

pub use canonical::{
    collapse_whitespace, hash_canonical_bytes, hash_raw_bytes, normalize, normalize_document,
    strip_code, tokenize, CanonicalDocument, CanonicalError, NormalizeConfig, Token,
};
pub use fingerprint::{
    fingerprint_tokens, kgram_hashes, winnow, DocumentFingerprint, Fingerprint, FingerprintConfig,
    FingerprintError, FingerprintMeta, KGramHash, FINGERPRINT_ALGORITHM, FINGERPRINT_VERSION,
    HASH_BASE,
};
pub use matcher::{
    jaccard_percent, CacheKey, CompareError, CompareMetrics, Comparator, ComparisonReport,
    Document, DocumentReport, FingerprintCache, RiskLevel, RiskPolicy,
};

mod config;

pub use crate::config::{CodefpConfig, ConfigError};

use thiserror::Error;

/// Errors that can occur while running the full pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("canonicalization failure: {0}")]
    Canonical(#[from] CanonicalError),
    #[error("fingerprinting failure: {0}")]
    Fingerprint(#[from] FingerprintError),
    #[error("comparison failure: {0}")]
    Compare(#[from] CompareError),
    #[error("configuration failure: {0}")]
    Config(#[from] ConfigError),
}

/// Compare a batch of documents under one configuration.
///
/// Convenience wrapper that builds a [`Comparator`] from the config's
/// canonical and fingerprint sections. Each document is fingerprinted once;
/// the matrix diagonal is 100 by convention.
pub fn compare_documents(
    documents: &[Document],
    cfg: &CodefpConfig,
) -> Result<ComparisonReport, PipelineError> {
    let comparator = Comparator::new(cfg.canonical.clone(), cfg.fingerprint.clone())
        .with_parallel(cfg.use_parallel);
    Ok(comparator.compare(documents)?)
}

/// Run the canonical and fingerprint stages for a single document.
///
/// Useful for callers that manage their own comparison or caching strategy.
pub fn fingerprint_document(
    doc_id: &str,
    text: &str,
    cfg: &CodefpConfig,
) -> Result<DocumentFingerprint, PipelineError> {
    let canonical = normalize_document(doc_id, text, &cfg.canonical)?;
    Ok(fingerprint_tokens(&canonical.tokens, &cfg.fingerprint)?)
}
