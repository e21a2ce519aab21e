//! Binary-class Shannon entropy.

use crate::data::Label;

/// Class occurrence counts for a record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub neg: u32,
    pub pos: u32,
}

impl ClassCounts {
    /// Count labels from an iterator.
    pub fn from_labels(labels: impl IntoIterator<Item = Label>) -> Self {
        let mut counts = Self::default();
        for label in labels {
            counts.add(label);
        }
        counts
    }

    /// Record one occurrence of `label`.
    #[inline]
    pub fn add(&mut self, label: Label) {
        match label {
            Label::Neg => self.neg += 1,
            Label::Pos => self.pos += 1,
        }
    }

    /// Occurrences of one label.
    #[inline]
    pub fn count(&self, label: Label) -> u32 {
        match label {
            Label::Neg => self.neg,
            Label::Pos => self.pos,
        }
    }

    /// Total number of counted records.
    #[inline]
    pub fn total(&self) -> u32 {
        self.neg + self.pos
    }
}

/// Shannon entropy of a binary class distribution, in nats.
///
/// For counts `(n0, n1)` with total `n`, returns
/// `-(p0*ln(p0) + p1*ln(p1))` where `p[i] = n[i]/n`. A class with zero
/// proportion contributes 0 (its log term is never evaluated). An empty
/// record set has entropy 0. Pure function.
pub fn binary_entropy(counts: ClassCounts) -> f64 {
    let total = counts.total();
    if total == 0 {
        return 0.0;
    }

    let mut entropy = 0.0;
    for count in [counts.neg, counts.pos] {
        if count > 0 {
            let p = f64::from(count) / f64::from(total);
            entropy -= p * p.ln();
        }
    }
    entropy
}
