//! # codefp matcher
//!
//! ## Purpose
//!
//! `matcher` sits on top of the canonical and fingerprint stages and turns a
//! batch of raw documents into an N×N similarity matrix. It owns the
//! precompute-once discipline: every document is canonicalized and
//! fingerprinted exactly once per batch, and all pairwise comparisons read
//! the resulting immutable artifacts.
//!
//! ## Core types
//!
//! - [`Document`]: one `(id, raw_text)` input, optionally labeled.
//! - [`Comparator`]: the batch engine. Optional rayon fan-out
//!   (`with_parallel`), optional metrics observer (`with_metrics`), optional
//!   cross-request fingerprint cache (`with_cache`).
//! - [`ComparisonReport`]: per-document fingerprint counts plus the
//!   similarity matrix (diagonal 100 by convention, symmetric).
//! - [`jaccard_percent`]: the similarity estimator over two deduplicated
//!   hash sets.
//! - [`RiskPolicy`] / [`RiskLevel`]: caller-side score classification; the
//!   engine itself never applies thresholds.
//!
//! ## Example
//!
//! ```
//! use canonical::NormalizeConfig;
//! use fingerprint::FingerprintConfig;
//! use matcher::{Comparator, Document};
//!
//! let docs = vec![
//!     Document::new("a.c", "int add(int a, int b) { return a + b; }"),
//!     Document::new("b.c", "int add(int x, int y) { return x + y; } // same"),
//! ];
//!
//! let comparator = Comparator::new(
//!     NormalizeConfig::default(),
//!     FingerprintConfig::new().with_k(3).with_window(2),
//! );
//! let report = comparator.compare(&docs).unwrap();
//! assert_eq!(report.similarity(0, 0), 100.0);
//! assert_eq!(report.similarity(0, 1), report.similarity(1, 0));
//! ```

mod cache;
mod engine;
mod metrics;
mod similarity;
mod types;

pub use crate::cache::{CacheKey, FingerprintCache};
pub use crate::engine::Comparator;
pub use crate::metrics::CompareMetrics;
pub use crate::similarity::jaccard_percent;
pub use crate::types::{
    CompareError, ComparisonReport, Document, DocumentReport, RiskLevel, RiskPolicy,
};
