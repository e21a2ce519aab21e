//! Batch classification over a learned tree.

use ndarray::ArrayView2;

use crate::data::Label;
use crate::repr::Tree;
use crate::utils::Parallelism;

/// Batch predictor over an immutable [`Tree`].
///
/// Output is aggregated strictly by row position, so sequential and
/// parallel execution are guaranteed to produce identical labels.
pub struct TreePredictor<'a> {
    tree: &'a Tree,
}

impl<'a> TreePredictor<'a> {
    pub fn new(tree: &'a Tree) -> Self {
        Self { tree }
    }

    /// Classify every row of `features` into a pre-allocated buffer.
    ///
    /// `features` must have `tree.n_attributes()` columns and as many rows
    /// as `out` has slots.
    pub fn predict_into(
        &self,
        features: ArrayView2<'_, i32>,
        out: &mut [Label],
        parallelism: Parallelism,
    ) {
        debug_assert_eq!(features.nrows(), out.len());
        debug_assert_eq!(features.ncols(), self.tree.n_attributes() as usize);

        let slots: Vec<(usize, &mut Label)> = out.iter_mut().enumerate().collect();
        parallelism.maybe_par_for_each(slots, |(row, slot)| {
            *slot = self.tree.predict_row(features.row(row));
        });
    }

    /// Classify every row of `features` into a fresh vector.
    pub fn predict(&self, features: ArrayView2<'_, i32>, parallelism: Parallelism) -> Vec<Label> {
        let mut out = vec![Label::Neg; features.nrows()];
        self.predict_into(features, &mut out, parallelism);
        out
    }
}
