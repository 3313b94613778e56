//! K-gram hashing over a canonical token stream.
//!
//! Each k-gram (k consecutive tokens) is hashed with a polynomial hash over
//! base [`HASH_BASE`] in u32 arithmetic, so values wrap modulo 2^32. The
//! k-gram hashes are maintained incrementally while the window slides, which
//! keeps generation O(n) in the token count regardless of k.

use serde::{Deserialize, Serialize};

/// Prime base for the polynomial hash.
pub const HASH_BASE: u32 = 257;

/// One hashed k-gram with its starting token position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KGramHash {
    /// Polynomial hash of the k-gram, wrapping modulo 2^32.
    pub hash: u32,
    /// Index of the first token of this k-gram in the token stream.
    pub position: usize,
    /// Space-joined k-gram text, for diagnostics only. Populated on request;
    /// never consulted by any downstream computation.
    pub kgram_text: Option<String>,
}

/// Compute one hash per k-gram starting position `0 ..= len - k`.
///
/// The caller must provide **canonical tokens in order**; this function does
/// no normalization or tokenization. Fewer than `k` tokens (or `k == 0`)
/// yields an empty sequence immediately.
pub fn kgram_hashes<S: AsRef<str>>(tokens: &[S], k: usize, include_text: bool) -> Vec<KGramHash> {
    let n = tokens.len();
    if k == 0 || n < k {
        return Vec::new();
    }

    // Hash each token's characters once, then treat the token hashes as the
    // digits of the k-gram polynomial.
    let mut th: Vec<u32> = Vec::with_capacity(n);
    th.extend(tokens.iter().map(|t| token_hash(t.as_ref())));

    // base^(k-1), for removing the departing token's contribution.
    let mut base_km1 = 1u32;
    for _ in 1..k {
        base_km1 = base_km1.wrapping_mul(HASH_BASE);
    }

    let mut out = Vec::with_capacity(n - k + 1);
    let mut h = 0u32;
    for &digit in th.iter().take(k) {
        h = h.wrapping_mul(HASH_BASE).wrapping_add(digit);
    }
    out.push(make_entry(tokens, 0, k, h, include_text));

    for (i, (&old, &new)) in th.iter().zip(th.iter().skip(k)).enumerate() {
        h = h.wrapping_sub(old.wrapping_mul(base_km1));
        h = h.wrapping_mul(HASH_BASE).wrapping_add(new);
        out.push(make_entry(tokens, i + 1, k, h, include_text));
    }

    out
}

/// Polynomial hash of one token's characters.
#[inline]
fn token_hash(token: &str) -> u32 {
    let mut h = 0u32;
    for ch in token.chars() {
        h = h.wrapping_mul(HASH_BASE).wrapping_add(ch as u32);
    }
    h
}

fn make_entry<S: AsRef<str>>(
    tokens: &[S],
    position: usize,
    k: usize,
    hash: u32,
    include_text: bool,
) -> KGramHash {
    let kgram_text = include_text.then(|| {
        let mut text = String::new();
        for (j, token) in tokens[position..position + k].iter().enumerate() {
            if j > 0 {
                text.push(' ');
            }
            text.push_str(token.as_ref());
        }
        text
    });
    KGramHash {
        hash,
        position,
        kgram_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tokens_yield_nothing() {
        let tokens: Vec<&str> = vec![];
        assert!(kgram_hashes(&tokens, 3, false).is_empty());
    }

    #[test]
    fn k_zero_yields_nothing() {
        assert!(kgram_hashes(&["a", "b", "c"], 0, false).is_empty());
    }

    #[test]
    fn fewer_tokens_than_k_yield_nothing() {
        assert!(kgram_hashes(&["a", "b"], 3, false).is_empty());
    }

    #[test]
    fn exact_k_yields_one() {
        let hashes = kgram_hashes(&["a", "b", "c"], 3, false);
        assert_eq!(hashes.len(), 1);
        assert_eq!(hashes[0].position, 0);
    }

    #[test]
    fn count_is_len_minus_k_plus_one() {
        let tokens = ["a", "b", "c", "d", "e"];
        let hashes = kgram_hashes(&tokens, 3, false);
        assert_eq!(hashes.len(), 3);
        let positions: Vec<usize> = hashes.iter().map(|h| h.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn rolling_matches_direct_recompute() {
        let tokens: Vec<String> = (0..200).map(|i| format!("tok{}", i * 37 % 50)).collect();
        let k = 7;
        let rolled = kgram_hashes(&tokens, k, false);

        // Direct evaluation of the same polynomial, one window at a time.
        for entry in &rolled {
            let mut h = 0u32;
            for token in &tokens[entry.position..entry.position + k] {
                h = h.wrapping_mul(HASH_BASE).wrapping_add(token_hash(token));
            }
            assert_eq!(entry.hash, h, "mismatch at position {}", entry.position);
        }
    }

    #[test]
    fn deterministic() {
        let tokens = ["the", "quick", "brown", "fox", "jumps"];
        assert_eq!(kgram_hashes(&tokens, 3, false), kgram_hashes(&tokens, 3, false));
    }

    #[test]
    fn order_sensitive() {
        let a = kgram_hashes(&["x", "y", "z"], 2, false);
        let b = kgram_hashes(&["z", "y", "x"], 2, false);
        assert_ne!(a, b);
    }

    #[test]
    fn single_token_k1() {
        let hashes = kgram_hashes(&["hello"], 1, false);
        assert_eq!(hashes.len(), 1);
    }

    #[test]
    fn hashes_well_distributed() {
        let tokens: Vec<String> = (0..50).map(|i| format!("t{i}")).collect();
        let hashes = kgram_hashes(&tokens, 3, false);
        let first = hashes[0].hash;
        assert!(!hashes.iter().all(|h| h.hash == first));
    }

    #[test]
    fn kgram_text_on_request_only() {
        let tokens = ["a", "b", "c", "d"];
        let with = kgram_hashes(&tokens, 2, true);
        assert_eq!(with[0].kgram_text.as_deref(), Some("a b"));
        assert_eq!(with[2].kgram_text.as_deref(), Some("c d"));

        let without = kgram_hashes(&tokens, 2, false);
        assert!(without.iter().all(|h| h.kgram_text.is_none()));
        // Text does not feed the hash.
        assert_eq!(with[0].hash, without[0].hash);
    }

    #[test]
    fn works_with_owned_strings() {
        let tokens: Vec<String> = vec!["hello".into(), "world".into(), "again".into()];
        assert_eq!(kgram_hashes(&tokens, 2, false).len(), 2);
    }
}
