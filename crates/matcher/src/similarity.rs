//! Jaccard similarity over fingerprint hash sets.

/// Jaccard index of two sorted, deduplicated hash slices, as a percentage.
///
/// Returns `100 × |A∩B| / |A∪B|` in [0, 100]; 0 when either side is empty.
/// Symmetric for all inputs. Self-similarity on the matrix diagonal is
/// assigned by the comparator, never computed here.
pub fn jaccard_percent(a: &[u32], b: &[u32]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Both slices are sorted and deduplicated (artifact invariant), so the
    // intersection is a linear merge.
    let mut intersection = 0usize;
    let (mut i, mut j) = (0usize, 0usize);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                intersection += 1;
                i += 1;
                j += 1;
            }
        }
    }

    let union = a.len() + b.len() - intersection;
    100.0 * intersection as f64 / union as f64
}
