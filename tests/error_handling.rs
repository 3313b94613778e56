use codefp::{
    compare_documents, fingerprint_document, CanonicalError, CodefpConfig, CompareError, Document,
    FingerprintConfig, FingerprintError, NormalizeConfig, PipelineError,
};

fn docs(n: usize) -> Vec<Document> {
    (0..n)
        .map(|i| {
            let text = (0..60).map(|t| format!("w{i}x{t}")).collect::<Vec<_>>().join(" ");
            Document::new(format!("doc-{i}"), text)
        })
        .collect()
}

#[test]
fn zero_k_is_rejected_before_any_processing() {
    let cfg = CodefpConfig {
        fingerprint: FingerprintConfig::new().with_k(0),
        ..Default::default()
    };
    let err = compare_documents(&docs(2), &cfg).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Compare(CompareError::Fingerprint(FingerprintError::InvalidConfigK {
            k: 0
        }))
    ));
}

#[test]
fn zero_window_is_rejected_before_any_processing() {
    let cfg = CodefpConfig {
        fingerprint: FingerprintConfig::new().with_window(0),
        ..Default::default()
    };
    let err = compare_documents(&docs(2), &cfg).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Compare(CompareError::Fingerprint(
            FingerprintError::InvalidConfigWindow { window: 0 }
        ))
    ));
}

#[test]
fn reserved_canonical_version_is_rejected() {
    let cfg = CodefpConfig {
        canonical: NormalizeConfig {
            version: 0,
            ..Default::default()
        },
        ..Default::default()
    };
    let err = compare_documents(&docs(2), &cfg).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Compare(CompareError::Canonical(CanonicalError::InvalidConfig(_)))
    ));
}

#[test]
fn blank_document_id_is_rejected() {
    let cfg = CodefpConfig::default();
    let err = fingerprint_document("  ", "some text", &cfg).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Canonical(CanonicalError::MissingDocId)
    ));
}

#[test]
fn empty_batch_is_not_an_error() {
    let report = compare_documents(&[], &CodefpConfig::default()).expect("empty batch is legal");
    assert!(report.is_empty());
    assert!(report.similarity_matrix.is_empty());
    assert!(report.per_document.is_empty());
}

#[test]
fn twenty_nine_tokens_at_default_k_yield_nothing() {
    // Default config: k = 30, window = 25. One token short of a single
    // k-gram.
    let cfg = CodefpConfig::default();
    let short: String = (0..29).map(|i| format!("tok{i}")).collect::<Vec<_>>().join(" ");

    let artifact = fingerprint_document("short", &short, &cfg).expect("short input is legal");
    assert_eq!(artifact.count(), 0);
    assert_eq!(artifact.meta.token_count, 29);

    let mut batch = docs(1);
    batch.push(Document::new("short", short));
    let report = compare_documents(&batch, &cfg).expect("batch runs");
    assert_eq!(report.per_document[1].fingerprint_count, 0);
    assert_eq!(report.similarity(0, 1), 0.0);
    assert_eq!(report.similarity(1, 0), 0.0);
    // Degenerate documents still own their diagonal cell.
    assert_eq!(report.similarity(1, 1), 100.0);
}

#[test]
fn degenerate_documents_participate_normally() {
    let cfg = CodefpConfig::default();
    let batch = vec![
        Document::new("empty", ""),
        Document::new("comment-only", "/* nothing but a comment */"),
        docs(1).remove(0),
    ];
    let report = compare_documents(&batch, &cfg).expect("batch runs");
    for i in 0..3 {
        assert_eq!(report.similarity(i, i), 100.0);
    }
    assert_eq!(report.similarity(0, 2), 0.0);
    assert_eq!(report.similarity(1, 2), 0.0);
    assert_eq!(report.per_document[0].fingerprint_count, 0);
    assert_eq!(report.per_document[1].fingerprint_count, 0);
}
