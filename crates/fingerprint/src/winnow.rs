//! Winnowing: windowed minimum selection over the k-gram hash sequence.
//!
//! A bounded FIFO buffer holds up to `window` consecutive k-gram entries.
//! Each time the buffer fills, the minimum hash in it is selected and the
//! oldest entry is popped. Ties break to the **leftmost** (first-seen)
//! minimum, enforced by the explicit linear scan below. The same
//! `(hash, position)` pair is never emitted twice even when overlapping
//! windows keep selecting it.

use std::collections::{HashSet, VecDeque};

use crate::fingerprint::Fingerprint;
use crate::kgram::KGramHash;

/// Select fingerprints from an ordered k-gram hash sequence.
///
/// Output order follows selection order. Inputs with fewer than `window`
/// entries never fill a window and produce no fingerprints; the sliding
/// buffer is the only state, bounded by `window`.
pub fn winnow(kgrams: &[KGramHash], window: usize) -> Vec<Fingerprint> {
    if window == 0 || kgrams.len() < window {
        return Vec::new();
    }

    let mut fingerprints = Vec::new();
    let mut selected: HashSet<(u32, usize)> = HashSet::new();
    let mut buffer: VecDeque<&KGramHash> = VecDeque::with_capacity(window);

    for entry in kgrams {
        buffer.push_back(entry);

        if buffer.len() == window {
            // Strict `<` keeps the first-seen minimum on ties.
            let mut min = buffer[0];
            for &candidate in buffer.iter().skip(1) {
                if candidate.hash < min.hash {
                    min = candidate;
                }
            }

            if selected.insert((min.hash, min.position)) {
                fingerprints.push(Fingerprint {
                    hash: min.hash,
                    position: min.position,
                });
            }

            buffer.pop_front();
        }
    }

    fingerprints
}
