use thiserror::Error;

/// Errors that can occur during canonicalization.
///
/// Short or empty input is never an error; the pipeline is total over text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("canonical document requires a non-empty doc_id")]
    MissingDocId,
}
