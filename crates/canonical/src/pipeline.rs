use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::document::CanonicalDocument;
use crate::error::CanonicalError;
use crate::hash::hash_canonical_bytes;
use crate::strip::strip_code;
use crate::token::{tokenize, Token};
use crate::whitespace::collapse_whitespace;

/// Normalizes raw source text into canonical form.
///
/// Comments and string-literal bodies are stripped (per config), every
/// non-word character becomes a space, runs of whitespace collapse to one
/// space, the result is trimmed and lowercased. Pure and idempotent.
pub fn normalize(input: &str, cfg: &NormalizeConfig) -> String {
    let stripped: Cow<str> = if cfg.strip_comments || cfg.strip_string_literals {
        Cow::Owned(strip_code(
            input,
            cfg.strip_comments,
            cfg.strip_string_literals,
        ))
    } else {
        Cow::Borrowed(input)
    };

    // Unicode normalization comes first; it can change character identity.
    let folded: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(stripped.nfkc().collect::<String>())
    } else {
        stripped
    };

    // Lowercasing can expand one character into several (e.g. İ into i plus
    // a combining mark); the word-character test runs on the expansion.
    let mut masked = String::with_capacity(folded.len());
    for ch in folded.chars() {
        if cfg.lowercase {
            for lower in ch.to_lowercase() {
                push_word_char(&mut masked, lower);
            }
        } else {
            push_word_char(&mut masked, ch);
        }
    }

    collapse_whitespace(&masked)
}

/// Main entry point: normalizes `input` and wraps it in a
/// [`CanonicalDocument`] carrying tokens and a version-aware identity hash.
///
/// Empty canonical text is a legal result; only a blank `doc_id` or a
/// reserved config version is rejected.
pub fn normalize_document(
    doc_id: impl Into<String>,
    input: &str,
    cfg: &NormalizeConfig,
) -> Result<CanonicalDocument, CanonicalError> {
    cfg.validate()?;

    let doc_id: String = doc_id.into();
    let trimmed = doc_id.trim();
    if trimmed.is_empty() {
        return Err(CanonicalError::MissingDocId);
    }
    let doc_id = if doc_id.len() == trimmed.len() {
        doc_id
    } else {
        trimmed.to_string()
    };

    let canonical_text = normalize(input, cfg);
    let tokens: Vec<Token> = tokenize(&canonical_text);
    let sha256_hex = hash_canonical_bytes(cfg.version, canonical_text.as_bytes());

    Ok(CanonicalDocument {
        doc_id,
        canonical_text,
        tokens,
        sha256_hex,
        canonical_version: cfg.version,
        config: cfg.clone(),
    })
}

/// Word characters survive normalization; everything else is a delimiter.
#[inline]
fn push_word_char(masked: &mut String, ch: char) {
    if ch.is_alphanumeric() || ch == '_' {
        masked.push(ch);
    } else {
        masked.push(' ');
    }
}
