//! Seeded synthetic data generators for tests and benchmarks.

use ndarray::Array2;
use rand::prelude::*;

use crate::data::{Dataset, Label};

/// Generate random coarse features: each value is `min + k * step` for a
/// uniform `k`, capped at `max`.
pub fn random_coarse_features(
    rows: usize,
    cols: usize,
    seed: u64,
    min: i32,
    max: i32,
    step: i32,
) -> Array2<i32> {
    assert!(max >= min);
    assert!(step > 0);
    let mut rng = StdRng::seed_from_u64(seed);
    let k_max = (max - min) / step;
    let values = (0..rows * cols)
        .map(|_| min + rng.gen_range(0..=k_max) * step)
        .collect();
    Array2::from_shape_vec((rows, cols), values)
        .expect("buffer length matches rows * cols")
}

/// Label each row by thresholding one attribute: `<=` yields `Neg`, `>`
/// yields `Pos`.
pub fn threshold_labels(features: &Array2<i32>, attribute: usize, threshold: i32) -> Vec<Label> {
    features
        .rows()
        .into_iter()
        .map(|row| if row[attribute] <= threshold { Label::Neg } else { Label::Pos })
        .collect()
}

/// Like [`threshold_labels`], but flips each label with probability
/// `flip_prob`.
pub fn noisy_threshold_labels(
    features: &Array2<i32>,
    attribute: usize,
    threshold: i32,
    flip_prob: f64,
    seed: u64,
) -> Vec<Label> {
    let mut rng = StdRng::seed_from_u64(seed);
    threshold_labels(features, attribute, threshold)
        .into_iter()
        .map(|label| if rng.gen_bool(flip_prob) { label.opposite() } else { label })
        .collect()
}

/// A fully separable dataset: coarse random features with labels decided by
/// one attribute threshold at the middle of its range.
pub fn separable_dataset(rows: usize, cols: usize, seed: u64) -> Dataset {
    let features = random_coarse_features(rows, cols, seed, 0, 20, 2);
    let labels = threshold_labels(&features, 0, 10);
    Dataset::new(features, labels).unwrap_or_else(|e| panic!("generator produced invalid dataset: {e}"))
}
