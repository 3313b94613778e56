//! codefp canonical text layer.
//!
//! This crate normalizes raw source text into a deterministic, versioned
//! format. Downstream stages (k-gram hashing, winnowing, comparison) rely on
//! it for stable identity.
//!
//! ## What we do
//!
//! - Strip line comments (`//…`), block comments (`/*…*/`), and single- or
//!   double-quoted string-literal bodies
//! - Unicode normalization (NFKC by default, configurable)
//! - Collapse every non-word character to a single space
//! - Collapse repeated whitespace, trim, lowercase
//! - Tokenization with byte offsets for downstream accuracy
//! - Versioned hashes so you can tell which canonicalization was used
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Give us the same text
//! and config, you get the same result on any machine. Normalization is
//! idempotent: re-normalizing an already canonical string is a no-op.
//!
//! ## Invariants worth knowing
//!
//! - Stripping is best-effort: malformed or unterminated comments and quotes
//!   degrade to partial stripping, never to an error
//! - Empty canonical text is a legal output (short-document path); only a
//!   missing doc id or a reserved config version is rejected
//! - Output depends only on text + config

mod config;
mod document;
mod error;
mod hash;
mod pipeline;
mod strip;
mod token;
mod whitespace;

pub use crate::config::NormalizeConfig;
pub use crate::document::CanonicalDocument;
pub use crate::error::CanonicalError;
pub use crate::hash::{hash_canonical_bytes, hash_raw_bytes};
pub use crate::pipeline::{normalize, normalize_document};
pub use crate::strip::strip_code;
pub use crate::token::{tokenize, Token};
pub use crate::whitespace::collapse_whitespace;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_normalize_default() {
        let input = "  int Main()  {\n  return   0; }\n";
        let cfg = NormalizeConfig::default();
        let doc = normalize_document("doc-basic", input, &cfg).expect("normalization succeeds");

        assert_eq!(doc.canonical_text, "int main return 0");
        assert_eq!(doc.doc_id, "doc-basic");
        assert_eq!(doc.canonical_version, cfg.version);
        assert_eq!(doc.config, cfg);

        let expected_tokens = vec![
            ("int", 0usize, 3usize),
            ("main", 4, 8),
            ("return", 9, 15),
            ("0", 16, 17),
        ];
        assert_eq!(doc.tokens.len(), expected_tokens.len());
        for (token, (text, start, end)) in doc.tokens.iter().zip(expected_tokens.into_iter()) {
            assert_eq!(token.text, text);
            assert_eq!(token.start, start);
            assert_eq!(token.end, end);
        }

        let expected_hash =
            hash_canonical_bytes(doc.canonical_version, doc.canonical_text.as_bytes());
        assert_eq!(doc.sha256_hex, expected_hash);
    }

    #[test]
    fn comments_do_not_survive() {
        let cfg = NormalizeConfig::default();
        let with = normalize(
            "int x = 1; // counter\nint y = 2; /* unused\n spans lines */ int z = 3;",
            &cfg,
        );
        let without = normalize("int x = 1;\nint y = 2;  int z = 3;", &cfg);
        assert_eq!(with, without);
        assert_eq!(with, "int x 1 int y 2 int z 3");
    }

    #[test]
    fn string_literal_bodies_removed() {
        let cfg = NormalizeConfig::default();
        let a = normalize(r#"print("hello // not a comment") + 'x y z'"#, &cfg);
        assert_eq!(a, "print");
    }

    #[test]
    fn normalize_is_idempotent() {
        let cfg = NormalizeConfig::default();
        let inputs = [
            "fn main() { let x = \"quoted\"; } // trailing",
            "  tabs\t\tand\r\nnewlines  ",
            "",
            "/* only a comment */",
            "UPPER lower MiXeD_case 123",
        ];
        for input in inputs {
            let once = normalize(input, &cfg);
            let twice = normalize(&once, &cfg);
            assert_eq!(once, twice, "idempotency violated for {input:?}");
        }
    }

    #[test]
    fn punctuation_collapses_to_single_spaces() {
        let cfg = NormalizeConfig::default();
        assert_eq!(normalize("a+b==c;d->e", &cfg), "a b c d e");
        assert_eq!(normalize("under_score survives", &cfg), "under_score survives");
    }

    #[test]
    fn empty_canonical_text_is_not_an_error() {
        let cfg = NormalizeConfig::default();
        let doc = normalize_document("doc-empty", "/* nothing here */ !!!", &cfg)
            .expect("empty canonical text is legal");
        assert!(doc.canonical_text.is_empty());
        assert!(doc.tokens.is_empty());
    }

    #[test]
    fn missing_doc_id_rejected() {
        let cfg = NormalizeConfig::default();
        let res = normalize_document("  ", "content", &cfg);
        assert!(matches!(res, Err(CanonicalError::MissingDocId)));
    }

    #[test]
    fn reserved_config_version_rejected() {
        let cfg = NormalizeConfig {
            version: 0,
            ..Default::default()
        };
        let res = normalize_document("doc", "content", &cfg);
        assert!(matches!(res, Err(CanonicalError::InvalidConfig(_))));
    }

    #[test]
    fn lowercase_can_be_disabled() {
        let cfg = NormalizeConfig {
            lowercase: false,
            ..Default::default()
        };
        assert_eq!(normalize("Mixed CASE", &cfg), "Mixed CASE");
    }

    #[test]
    fn unicode_equivalence_nfkc() {
        let composed = "caf\u{00E9}";
        let decomposed = "cafe\u{0301}";
        let cfg = NormalizeConfig::default();

        let doc_a = normalize_document("doc-a", composed, &cfg).expect("composed");
        let doc_b = normalize_document("doc-b", decomposed, &cfg).expect("decomposed");

        assert_eq!(doc_a.canonical_text, doc_b.canonical_text);
        assert_eq!(doc_a.sha256_hex, doc_b.sha256_hex);
    }

    #[test]
    fn canonical_hash_includes_version() {
        let cfg_v1 = NormalizeConfig::default();
        let cfg_v2 = NormalizeConfig {
            version: cfg_v1.version + 1,
            ..Default::default()
        };

        let doc_v1 = normalize_document("doc", "same text", &cfg_v1).expect("v1");
        let doc_v2 = normalize_document("doc", "same text", &cfg_v2).expect("v2");

        assert_eq!(doc_v1.canonical_text, doc_v2.canonical_text);
        assert_ne!(doc_v1.sha256_hex, doc_v2.sha256_hex);
    }
}
