//! Schema types for model serialization.
//!
//! These types provide a stable serialization format independent of runtime
//! types, so the runtime tree layout can evolve without breaking persisted
//! artifacts. The artifact replaces the historical approach of emitting a
//! generated classifier program: the tree itself is the portable decision
//! procedure, and any loader that walks it reproduces training-time
//! predictions exactly.

use serde::{Deserialize, Serialize};

/// Current schema version written by [`to_schema`](super::to_schema).
pub const SCHEMA_VERSION: u32 = 1;

/// Model metadata schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetaSchema {
    /// Number of attribute columns.
    pub num_attributes: u32,
    /// Attribute names (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_names: Option<Vec<String>>,
}

/// Tree schema (SoA layout, one entry per node).
///
/// Leaves carry sentinel split values (attribute 0, threshold 0) and
/// self-referential children; `is_leaf` is authoritative. Labels use wire
/// codes -1 / +1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeSchema {
    /// Number of nodes (decision + leaves).
    pub num_nodes: u32,
    /// Maximum depth reached during training (root = 0).
    pub max_depth: u32,
    /// Split attribute index per node.
    pub split_attributes: Vec<u32>,
    /// Split threshold per node.
    pub thresholds: Vec<i32>,
    /// Left child index per node (taken when `value <= threshold`).
    pub children_left: Vec<u32>,
    /// Right child index per node (taken when `value > threshold`).
    pub children_right: Vec<u32>,
    /// Leaf flag per node.
    pub is_leaf: Vec<bool>,
    /// Majority label code per node.
    pub labels: Vec<i8>,
}

/// Top-level persisted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Schema version for forward compatibility.
    pub version: u32,
    pub meta: ModelMetaSchema,
    pub tree: TreeSchema,
}
