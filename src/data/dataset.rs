//! User-facing dataset abstraction.
//!
//! This is the canonical entry point for training: a validated, immutable
//! collection of records. Attributes are expected to be pre-coarsened to an
//! integer-like granularity by the ingestion step (see [`super::ingest`]).

use ndarray::{Array2, ArrayView1, ArrayView2};

// =============================================================================
// Label
// =============================================================================

/// Binary class label.
///
/// Wire codes are -1 for [`Label::Neg`] and +1 for [`Label::Pos`].
/// Majority voting favors `Pos` when the two classes are tied
/// (see [`crate::training::majority_vote`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Neg,
    Pos,
}

impl Label {
    /// Decode a wire code. Only -1 and +1 are valid.
    pub fn from_code(code: i8) -> Option<Label> {
        match code {
            -1 => Some(Label::Neg),
            1 => Some(Label::Pos),
            _ => None,
        }
    }

    /// Wire code for this label.
    #[inline]
    pub fn code(self) -> i8 {
        match self {
            Label::Neg => -1,
            Label::Pos => 1,
        }
    }

    /// The other label.
    #[inline]
    pub fn opposite(self) -> Label {
        match self {
            Label::Neg => Label::Pos,
            Label::Pos => Label::Neg,
        }
    }
}

// =============================================================================
// DatasetError
// =============================================================================

/// Dataset construction/validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset must contain at least one record")]
    Empty,
    #[error("dataset must have at least one attribute column")]
    NoAttributes,
    #[error("label count {n_labels} does not match record count {n_records}")]
    LabelCountMismatch { n_records: usize, n_labels: usize },
    #[error("value buffer of length {len} does not factor into {n_records} records x {n_attributes} attributes")]
    ShapeMismatch {
        len: usize,
        n_records: usize,
        n_attributes: usize,
    },
}

// =============================================================================
// Dataset
// =============================================================================

/// Immutable labeled records: one row per record, one column per attribute.
///
/// A constructed `Dataset` is guaranteed non-empty with at least one
/// attribute column, which is the precondition the training core relies on.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Array2<i32>,
    labels: Vec<Label>,
}

impl Dataset {
    /// Create a dataset from a feature matrix and per-record labels.
    pub fn new(features: Array2<i32>, labels: Vec<Label>) -> Result<Self, DatasetError> {
        if features.nrows() == 0 {
            return Err(DatasetError::Empty);
        }
        if features.ncols() == 0 {
            return Err(DatasetError::NoAttributes);
        }
        if labels.len() != features.nrows() {
            return Err(DatasetError::LabelCountMismatch {
                n_records: features.nrows(),
                n_labels: labels.len(),
            });
        }
        Ok(Self { features, labels })
    }

    /// Create a dataset from a flat row-major value buffer.
    pub fn from_vec(
        values: Vec<i32>,
        n_records: usize,
        n_attributes: usize,
        labels: Vec<Label>,
    ) -> Result<Self, DatasetError> {
        let len = values.len();
        let features = Array2::from_shape_vec((n_records, n_attributes), values).map_err(|_| {
            DatasetError::ShapeMismatch {
                len,
                n_records,
                n_attributes,
            }
        })?;
        Self::new(features, labels)
    }

    /// Number of records.
    #[inline]
    pub fn n_records(&self) -> usize {
        self.features.nrows()
    }

    /// Number of attribute columns.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.features.ncols()
    }

    /// Read-only view of the feature matrix.
    #[inline]
    pub fn features(&self) -> ArrayView2<'_, i32> {
        self.features.view()
    }

    /// Attribute values of a single record.
    #[inline]
    pub fn record(&self, row: usize) -> ArrayView1<'_, i32> {
        self.features.row(row)
    }

    /// Label of a single record.
    #[inline]
    pub fn label(&self, row: usize) -> Label {
        self.labels[row]
    }

    /// All labels, in record order.
    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn label_codes_round_trip() {
        assert_eq!(Label::from_code(-1), Some(Label::Neg));
        assert_eq!(Label::from_code(1), Some(Label::Pos));
        assert_eq!(Label::from_code(0), None);
        assert_eq!(Label::from_code(Label::Pos.code()), Some(Label::Pos));
        assert_eq!(Label::Neg.opposite(), Label::Pos);
    }

    #[test]
    fn new_validates_shape() {
        let features = array![[2, 4], [6, 8]];
        let dataset = Dataset::new(features.clone(), vec![Label::Neg, Label::Pos]).unwrap();
        assert_eq!(dataset.n_records(), 2);
        assert_eq!(dataset.n_attributes(), 2);
        assert_eq!(dataset.record(1)[0], 6);
        assert_eq!(dataset.label(1), Label::Pos);

        let err = Dataset::new(features, vec![Label::Neg]).unwrap_err();
        assert!(matches!(err, DatasetError::LabelCountMismatch { .. }));
    }

    #[test]
    fn rejects_empty() {
        let err = Dataset::new(Array2::zeros((0, 3)), vec![]).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));

        let err = Dataset::new(Array2::zeros((3, 0)), vec![Label::Neg; 3]).unwrap_err();
        assert!(matches!(err, DatasetError::NoAttributes));
    }

    #[test]
    fn from_vec_checks_factorization() {
        let dataset =
            Dataset::from_vec(vec![1, 2, 3, 4, 5, 6], 3, 2, vec![Label::Neg; 3]).unwrap();
        assert_eq!(dataset.record(2)[1], 6);

        let err = Dataset::from_vec(vec![1, 2, 3], 2, 2, vec![Label::Neg; 2]).unwrap_err();
        assert!(matches!(err, DatasetError::ShapeMismatch { .. }));
    }
}
