//! Metrics hooks for the comparison layer.
//!
//! Callers install a [`CompareMetrics`] implementation on a
//! [`Comparator`](crate::Comparator) to observe fingerprint generation and
//! batch latency without coupling the engine to any metrics backend.
//! Observers are installed per-comparator; two comparators never share
//! events.

use std::time::Duration;

/// Observer for comparison operations.
pub trait CompareMetrics: Send + Sync {
    /// Record one fingerprint generation.
    ///
    /// Fires once per actual generation: a batch of N documents produces
    /// exactly N events, and a cache hit produces none.
    fn record_fingerprint(&self, doc_id: &str, fingerprint_count: usize, latency: Duration);

    /// Record a completed batch comparison of `document_count` documents.
    fn record_batch(&self, document_count: usize, latency: Duration);
}
