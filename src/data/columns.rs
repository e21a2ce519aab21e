//! Observed value ranges per attribute column.

use super::Dataset;

/// Per-attribute observed (min, max) over a full training set.
///
/// Derived once before training and read-only afterwards. Split search
/// enumerates every integer threshold in `min..=max` per attribute; it does
/// not deduplicate observed values, so coarse ingestion granularity keeps
/// the scan cheap.
#[derive(Debug, Clone)]
pub struct AttributeRanges {
    ranges: Vec<(i32, i32)>,
}

impl AttributeRanges {
    /// Scan the full dataset once and record each attribute's value range.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let features = dataset.features();
        let ranges = (0..dataset.n_attributes())
            .map(|attribute| {
                let column = features.column(attribute);
                let mut min = i32::MAX;
                let mut max = i32::MIN;
                for &value in column.iter() {
                    min = min.min(value);
                    max = max.max(value);
                }
                (min, max)
            })
            .collect();
        Self { ranges }
    }

    /// Number of attribute columns.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.ranges.len()
    }

    /// Observed minimum of an attribute.
    #[inline]
    pub fn min(&self, attribute: usize) -> i32 {
        self.ranges[attribute].0
    }

    /// Observed maximum of an attribute.
    #[inline]
    pub fn max(&self, attribute: usize) -> i32 {
        self.ranges[attribute].1
    }
}
