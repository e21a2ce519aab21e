//! Learned tree representation.
//!
//! - [`Tree`]: Immutable SoA node storage for traversal
//! - [`MutableTree`]: Append-only tree under construction during training
//! - [`TreeValidationError`]: Structural validation errors

mod mutable;
mod tree;

/// Node identifier, local to one tree (0 = root).
pub type NodeId = u32;

pub use mutable::MutableTree;
pub use tree::{Tree, TreeValidationError};
