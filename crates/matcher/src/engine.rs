use std::sync::Arc;
use std::time::Instant;

use canonical::{normalize_document, NormalizeConfig};
use fingerprint::{fingerprint_tokens, DocumentFingerprint, FingerprintConfig};
use rayon::prelude::*;
use tracing::debug;

use crate::cache::{CacheKey, FingerprintCache};
use crate::metrics::CompareMetrics;
use crate::similarity::jaccard_percent;
use crate::types::{CompareError, ComparisonReport, Document, DocumentReport};

/// Batch comparator: fingerprints every document exactly once, then fills
/// the pairwise similarity matrix from the precomputed artifacts.
///
/// The engine is a pure computation over immutable inputs; the comparator
/// holds only configuration plus optional collaborators (metrics observer,
/// fingerprint cache), so one instance can serve many batches.
pub struct Comparator {
    canonical_cfg: NormalizeConfig,
    fingerprint_cfg: FingerprintConfig,
    use_parallel: bool,
    metrics: Option<Arc<dyn CompareMetrics>>,
    cache: Option<Arc<FingerprintCache>>,
}

impl Comparator {
    /// Construct a comparator from explicit stage configs.
    pub fn new(canonical_cfg: NormalizeConfig, fingerprint_cfg: FingerprintConfig) -> Self {
        Self {
            canonical_cfg,
            fingerprint_cfg,
            use_parallel: false,
            metrics: None,
            cache: None,
        }
    }

    /// Fan the per-document and pairwise phases out across the rayon pool.
    /// Results are identical to the sequential path.
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Install a metrics observer for this comparator.
    pub fn with_metrics(mut self, metrics: Arc<dyn CompareMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Share a fingerprint cache across batches.
    pub fn with_cache(mut self, cache: Arc<FingerprintCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Compare every pair of documents in the batch.
    ///
    /// Each document is fingerprinted once; the matrix diagonal is 100 by
    /// convention and each off-diagonal pair is estimated once and mirrored.
    /// An empty batch is legal and returns an empty report. Configuration is
    /// validated up front: on error no document has been processed.
    pub fn compare(&self, documents: &[Document]) -> Result<ComparisonReport, CompareError> {
        self.canonical_cfg.validate()?;
        self.fingerprint_cfg.validate()?;

        let started = Instant::now();

        // Phase 1: one artifact per document. The collect is a hard barrier;
        // no comparison reads a set before its producing task completes.
        let artifacts: Vec<Arc<DocumentFingerprint>> = if self.use_parallel {
            documents
                .par_iter()
                .map(|doc| self.fingerprint_document(doc))
                .collect::<Result<_, _>>()?
        } else {
            documents
                .iter()
                .map(|doc| self.fingerprint_document(doc))
                .collect::<Result<_, _>>()?
        };

        // Phase 2: upper triangle only, mirrored into the symmetric cell.
        let n = documents.len();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();

        let score = |&(i, j): &(usize, usize)| -> f64 {
            jaccard_percent(&artifacts[i].hash_set, &artifacts[j].hash_set)
        };
        let scores: Vec<f64> = if self.use_parallel {
            pairs.par_iter().map(score).collect()
        } else {
            pairs.iter().map(score).collect()
        };

        let mut similarity_matrix = vec![vec![0.0f64; n]; n];
        for (i, row) in similarity_matrix.iter_mut().enumerate() {
            row[i] = 100.0;
        }
        for (&(i, j), &s) in pairs.iter().zip(scores.iter()) {
            similarity_matrix[i][j] = s;
            similarity_matrix[j][i] = s;
        }

        let per_document = documents
            .iter()
            .zip(artifacts.iter())
            .map(|(doc, artifact)| DocumentReport {
                doc_id: doc.id.clone(),
                fingerprint_count: artifact.count(),
            })
            .collect();

        let elapsed = started.elapsed();
        debug!(documents = n, pair_count = pairs.len(), ?elapsed, "batch compared");
        if let Some(metrics) = &self.metrics {
            metrics.record_batch(n, elapsed);
        }

        Ok(ComparisonReport {
            per_document,
            similarity_matrix,
        })
    }

    /// Fingerprint one document, going through the cache when one is
    /// installed.
    fn fingerprint_document(
        &self,
        document: &Document,
    ) -> Result<Arc<DocumentFingerprint>, CompareError> {
        match &self.cache {
            Some(cache) => {
                let key =
                    CacheKey::for_document(document, &self.canonical_cfg, &self.fingerprint_cfg);
                cache.get_or_insert_with(key, || self.generate(document))
            }
            None => Ok(Arc::new(self.generate(document)?)),
        }
    }

    /// Run the canonical and fingerprint stages for one document. This is
    /// the only place fingerprints are generated; the metrics event counts
    /// generator invocations.
    fn generate(&self, document: &Document) -> Result<DocumentFingerprint, CompareError> {
        let started = Instant::now();
        let canonical = normalize_document(&document.id, &document.text, &self.canonical_cfg)?;
        let artifact = fingerprint_tokens(&canonical.tokens, &self.fingerprint_cfg)?;
        debug!(
            doc_id = %document.id,
            tokens = canonical.token_count(),
            fingerprints = artifact.count(),
            "document fingerprinted"
        );
        if let Some(metrics) = &self.metrics {
            metrics.record_fingerprint(&document.id, artifact.count(), started.elapsed());
        }
        Ok(artifact)
    }
}
