//! dtree: entropy-driven binary decision tree induction.
//!
//! Trains a single binary decision tree over pre-coarsened integer
//! attributes using greedy entropy minimization, and serializes the
//! learned tree into a standalone artifact that reproduces in-memory
//! predictions exactly.
//!
//! # Key Types
//!
//! - [`TreeModel`] / [`TreeConfig`] - High-level model with train/predict
//! - [`Dataset`] / [`Label`] - Labeled training data
//! - [`Tree`] - Immutable learned tree structure
//! - [`persist`] - Versioned JSON serialization of trained models
//!
//! # Training
//!
//! Use `TreeConfig::builder()` to configure, then `TreeModel::train()`.
//! See the [`model`] module for details.

pub mod data;
pub mod inference;
pub mod model;
pub mod persist;
pub mod repr;
pub mod testing;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level model types
pub use model::{ConfigError, ModelMeta, TreeConfig, TreeModel};

// Data types (for preparing training data)
pub use data::{AttributeRanges, Dataset, DatasetError, IngestError, IngestSchema, Label};

// Learned tree representation
pub use repr::{NodeId, Tree, TreeValidationError};

// Training types
pub use training::{Majority, SplitCandidate, TreeParams, Verbosity};

// Shared utilities
pub use utils::{Parallelism, run_with_threads};
