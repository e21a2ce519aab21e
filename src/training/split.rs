//! Exhaustive best-split search over (attribute, threshold) pairs.

use crate::data::{AttributeRanges, Dataset};

use super::entropy::{ClassCounts, binary_entropy};

/// One candidate axis-aligned split and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitCandidate {
    pub attribute: usize,
    pub threshold: i32,
    /// Size-weighted entropy of the two resulting partitions.
    pub weighted_entropy: f64,
}

/// Find the (attribute, threshold) pair minimizing weighted child entropy.
///
/// For every attribute in order, every integer threshold `t` from the
/// attribute's observed minimum to its observed maximum (inclusive, step 1)
/// is scored: records with `value <= t` go left, the rest right, and the
/// score is `(|L|/|N|) * entropy(L) + (|R|/|N|) * entropy(R)`. The scan
/// covers the full numeric range rather than deduplicated observed values;
/// coarse ingestion granularity keeps this affordable.
///
/// Strict `<` comparison retains the first pair found in
/// attribute-then-threshold order when scores tie. The best-so-far starts
/// at (attribute 0, its minimum, +inf), so a usable pair is always
/// returned, and because `t = max` yields the degenerate single-partition
/// split, the winning score never exceeds the unsplit entropy of `rows`.
///
/// An attribute with a single distinct value degenerates to one iteration
/// (min == max); that is not an error.
///
/// Precondition: `rows` is non-empty.
pub fn find_best_split(
    dataset: &Dataset,
    rows: &[u32],
    ranges: &AttributeRanges,
) -> SplitCandidate {
    debug_assert!(!rows.is_empty(), "split search requires a non-empty record set");

    let features = dataset.features();
    let n_total = rows.len() as f64;

    let mut best = SplitCandidate {
        attribute: 0,
        threshold: ranges.min(0),
        weighted_entropy: f64::INFINITY,
    };

    for attribute in 0..ranges.n_attributes() {
        for threshold in ranges.min(attribute)..=ranges.max(attribute) {
            let mut left = ClassCounts::default();
            let mut right = ClassCounts::default();
            for &row in rows {
                let value = features[[row as usize, attribute]];
                if value <= threshold {
                    left.add(dataset.label(row as usize));
                } else {
                    right.add(dataset.label(row as usize));
                }
            }

            let weighted = (f64::from(left.total()) / n_total) * binary_entropy(left)
                + (f64::from(right.total()) / n_total) * binary_entropy(right);

            if weighted < best.weighted_entropy {
                best = SplitCandidate {
                    attribute,
                    threshold,
                    weighted_entropy: weighted,
                };
            }
        }
    }

    best
}

/// Partition a row-index set by one split, preserving record order.
///
/// Returns `(left, right)` where left holds rows with `value <= threshold`.
pub fn partition(
    dataset: &Dataset,
    rows: &[u32],
    attribute: usize,
    threshold: i32,
) -> (Vec<u32>, Vec<u32>) {
    let features = dataset.features();
    let mut left = Vec::new();
    let mut right = Vec::new();
    for &row in rows {
        if features[[row as usize, attribute]] <= threshold {
            left.push(row);
        } else {
            right.push(row);
        }
    }
    (left, right)
}
