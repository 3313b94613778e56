use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use codefp::{compare_documents, CodefpConfig, ComparisonReport, Document, RiskPolicy};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut json_output = false;
    let mut config_path: Option<String> = None;
    let mut paths: Vec<String> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json_output = true,
            "--config" => match args.next() {
                Some(path) => config_path = Some(path),
                None => {
                    eprintln!("--config requires a path");
                    process::exit(2);
                }
            },
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ => paths.push(arg),
        }
    }

    if paths.len() < 2 {
        print_usage();
        process::exit(2);
    }

    let cfg = match &config_path {
        Some(path) => CodefpConfig::from_yaml_file(path)?,
        None => CodefpConfig::default(),
    };

    // Document acquisition happens entirely before the engine is invoked;
    // unreadable files are reported here, never inside the core.
    let mut documents = Vec::with_capacity(paths.len());
    for path in &paths {
        let text = fs::read_to_string(path)
            .map_err(|err| format!("failed to read {path}: {err}"))?;
        let label = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        documents.push(Document::new(path.clone(), text).with_label(label));
    }

    let report = compare_documents(&documents, &cfg)?;
    info!(documents = report.len(), "comparison complete");

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &cfg.policy);
    }

    Ok(())
}

fn print_usage() {
    eprintln!("usage: codefp [--json] [--config <path>] <file> <file> [file...]");
    eprintln!();
    eprintln!("Compares the given files pairwise and prints fingerprint counts");
    eprintln!("and a similarity matrix (percentages).");
}

fn print_report(report: &ComparisonReport, policy: &RiskPolicy) {
    println!("fingerprints:");
    for doc in &report.per_document {
        println!("  {:>6}  {}", doc.fingerprint_count, doc.doc_id);
    }

    println!();
    println!("similarity:");
    let n = report.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let score = report.similarity(i, j);
            println!(
                "  {:>6.1}%  [{:?}]  {}  <->  {}",
                score,
                policy.classify(score),
                report.per_document[i].doc_id,
                report.per_document[j].doc_id,
            );
        }
    }
}
