use criterion::{black_box, criterion_group, criterion_main, Criterion};

use codefp::{
    compare_documents, fingerprint_document, CodefpConfig, Document, FingerprintConfig,
};

fn synthetic_source(statements: usize, vocab: &str) -> String {
    (0..statements)
        .map(|i| format!("int {vocab}_{i} = {vocab}_{i} + {i}; // {vocab}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_fingerprint(c: &mut Criterion) {
    let cfg = CodefpConfig::default();
    let text = synthetic_source(500, "var");

    c.bench_function("fingerprint_single_document", |b| {
        b.iter(|| fingerprint_document("bench", black_box(&text), &cfg).unwrap())
    });
}

fn bench_batch_compare(c: &mut Criterion) {
    let cfg = CodefpConfig {
        fingerprint: FingerprintConfig::new().with_k(10).with_window(8),
        ..Default::default()
    };
    let docs: Vec<Document> = (0..8)
        .map(|i| {
            let vocab = if i % 2 == 0 { "even" } else { "odd" };
            Document::new(format!("doc-{i}"), synthetic_source(200 + i, vocab))
        })
        .collect();

    c.bench_function("batch_compare_8_documents", |b| {
        b.iter(|| compare_documents(black_box(&docs), &cfg).unwrap())
    });

    let parallel_cfg = CodefpConfig {
        use_parallel: true,
        ..cfg.clone()
    };
    c.bench_function("batch_compare_8_documents_parallel", |b| {
        b.iter(|| compare_documents(black_box(&docs), &parallel_cfg).unwrap())
    });
}

criterion_group!(benches, bench_fingerprint, bench_batch_compare);
criterion_main!(benches);
