//! High-level model API.
//!
//! [`TreeModel`] wraps the learned [`Tree`] with training configuration and
//! metadata, and exposes train/predict entry points. Access components via
//! [`tree()`](TreeModel::tree), [`meta()`](TreeModel::meta), and
//! [`config()`](TreeModel::config).

mod config;

use ndarray::{ArrayView1, ArrayView2};

use crate::data::{Dataset, Label};
use crate::inference::TreePredictor;
use crate::repr::Tree;
use crate::training::TreeBuilder;
use crate::utils::run_with_threads;

pub use config::{ConfigError, TreeConfig};

// =============================================================================
// ModelMeta
// =============================================================================

/// Metadata describing a trained model's input layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMeta {
    /// Number of attribute columns the model was trained on.
    pub n_attributes: usize,
    /// Attribute names (optional).
    pub attribute_names: Option<Vec<String>>,
}

impl ModelMeta {
    pub fn new(n_attributes: usize) -> Self {
        Self {
            n_attributes,
            attribute_names: None,
        }
    }
}

// =============================================================================
// TreeModel
// =============================================================================

/// A trained binary decision tree classifier.
#[derive(Debug)]
pub struct TreeModel {
    tree: Tree,
    meta: ModelMeta,
    config: TreeConfig,
}

impl TreeModel {
    /// Train a model on a dataset.
    ///
    /// Training is deterministic and single-threaded; `Dataset`'s
    /// constructor guarantees the non-empty precondition, so training
    /// itself cannot fail.
    pub fn train(dataset: &Dataset, config: TreeConfig) -> Self {
        let tree = TreeBuilder::new(dataset, config.tree_params(), config.verbosity).build();
        Self {
            meta: ModelMeta::new(dataset.n_attributes()),
            tree,
            config,
        }
    }

    /// Create a model from its parts.
    ///
    /// Used when loading a persisted artifact, which carries the tree and
    /// metadata but not the training configuration.
    pub fn from_parts(tree: Tree, meta: ModelMeta, config: TreeConfig) -> Self {
        Self { tree, meta, config }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get reference to the learned tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Get reference to model metadata.
    pub fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    /// Get reference to the training configuration.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Set attribute names.
    pub fn with_attribute_names(mut self, names: Vec<String>) -> Self {
        self.meta.attribute_names = Some(names);
        self
    }

    // =========================================================================
    // Prediction
    // =========================================================================

    /// Classify a single record with the same attribute layout used for
    /// training.
    pub fn predict_row(&self, record: ArrayView1<'_, i32>) -> Label {
        self.tree.predict_row(record)
    }

    /// Classify a batch of records.
    ///
    /// `n_threads`: 0 = auto, 1 = sequential, >1 = dedicated pool.
    pub fn predict(&self, features: ArrayView2<'_, i32>, n_threads: usize) -> Vec<Label> {
        run_with_threads(n_threads, |parallelism| {
            TreePredictor::new(&self.tree).predict(features, parallelism)
        })
    }
}
