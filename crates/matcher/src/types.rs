use canonical::CanonicalError;
use fingerprint::FingerprintError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One input document for a comparison batch.
///
/// Immutable once ingested; the engine never mutates it. Acquisition
/// (reading files, decoding) is the caller's concern and happens before the
/// engine is invoked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Caller-chosen identifier, echoed back in the report.
    pub id: String,
    /// Raw document text.
    pub text: String,
    /// Optional display label (e.g. a file name).
    #[serde(default)]
    pub label: Option<String>,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Per-document entry in a comparison report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentReport {
    pub doc_id: String,
    /// Number of winnowed fingerprints (position-aware count, not the
    /// deduplicated set size).
    pub fingerprint_count: usize,
}

/// Result of comparing a batch of N documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonReport {
    /// One entry per input document, in input order.
    pub per_document: Vec<DocumentReport>,
    /// N×N matrix of similarity percentages in [0, 100]. The diagonal is
    /// 100 by convention and the matrix is symmetric.
    pub similarity_matrix: Vec<Vec<f64>>,
}

impl ComparisonReport {
    /// Number of documents in the batch.
    pub fn len(&self) -> usize {
        self.per_document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.per_document.is_empty()
    }

    /// Similarity between documents `i` and `j` in input order.
    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        self.similarity_matrix[i][j]
    }
}

/// Caller-side classification thresholds for similarity scores.
///
/// This is presentation policy: the engine reports raw percentages and
/// never consults these values. Callers tune them freely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RiskPolicy {
    /// Scores strictly above this are classified [`RiskLevel::High`].
    pub high: f64,
    /// Scores strictly above this (and not high) are [`RiskLevel::Moderate`].
    pub moderate: f64,
}

impl RiskPolicy {
    pub fn classify(&self, score: f64) -> RiskLevel {
        if score > self.high {
            RiskLevel::High
        } else if score > self.moderate {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            high: 70.0,
            moderate: 40.0,
        }
    }
}

/// Classification of one pairwise score under a [`RiskPolicy`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
}

/// Errors produced by the comparison layer.
///
/// The only failure path is configuration validation; short documents and
/// empty batches are legal inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// Canonical stage rejected its configuration or a document id.
    #[error("canonical error: {0}")]
    Canonical(#[from] CanonicalError),
    /// Fingerprint stage rejected its configuration.
    #[error("fingerprint error: {0}")]
    Fingerprint(#[from] FingerprintError),
}
