//! Model serialization: the tree exporter.
//!
//! A trained model is exported as a versioned, validated JSON artifact
//! ([`ModelSchema`]) rather than generated source code. The binding
//! contract: a model reloaded from its artifact classifies any record with
//! the training attribute layout identically to the in-memory tree.

mod schema;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::data::Label;
use crate::model::{ModelMeta, TreeConfig, TreeModel};
use crate::repr::{Tree, TreeValidationError};

pub use schema::{ModelMetaSchema, ModelSchema, SCHEMA_VERSION, TreeSchema};

// =============================================================================
// PersistError
// =============================================================================

/// Errors while saving or loading a model artifact.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("i/o error")]
    Io(#[from] std::io::Error),
    #[error("json error")]
    Json(#[from] serde_json::Error),
    #[error("unsupported schema version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
    #[error("{field} has length {got}, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("node {index} carries invalid label code {code}")]
    InvalidLabelCode { index: usize, code: i8 },
    #[error("invalid tree structure")]
    Structure(#[from] TreeValidationError),
}

// =============================================================================
// Conversion
// =============================================================================

/// Convert a trained model into its serialization schema.
///
/// The training configuration is not part of the artifact; it only
/// influences training, never prediction.
pub fn to_schema(model: &TreeModel) -> ModelSchema {
    let tree = model.tree();
    let n_nodes = tree.n_nodes();

    let mut tree_schema = TreeSchema {
        num_nodes: n_nodes as u32,
        max_depth: tree.max_depth(),
        split_attributes: Vec::with_capacity(n_nodes),
        thresholds: Vec::with_capacity(n_nodes),
        children_left: Vec::with_capacity(n_nodes),
        children_right: Vec::with_capacity(n_nodes),
        is_leaf: Vec::with_capacity(n_nodes),
        labels: Vec::with_capacity(n_nodes),
    };
    for node in 0..n_nodes as u32 {
        tree_schema.split_attributes.push(tree.split_attribute(node));
        tree_schema.thresholds.push(tree.split_threshold(node));
        tree_schema.children_left.push(tree.left_child(node));
        tree_schema.children_right.push(tree.right_child(node));
        tree_schema.is_leaf.push(tree.is_leaf(node));
        tree_schema.labels.push(tree.label(node).code());
    }

    ModelSchema {
        version: SCHEMA_VERSION,
        meta: ModelMetaSchema {
            num_attributes: tree.n_attributes(),
            attribute_names: model.meta().attribute_names.clone(),
        },
        tree: tree_schema,
    }
}

fn check_len(field: &'static str, expected: usize, got: usize) -> Result<(), PersistError> {
    if expected == got {
        Ok(())
    } else {
        Err(PersistError::LengthMismatch {
            field,
            expected,
            got,
        })
    }
}

/// Reconstruct a model from its serialization schema.
///
/// Validates the schema version, array lengths, label codes, and the
/// structural invariants of the decoded tree.
pub fn from_schema(schema: ModelSchema) -> Result<TreeModel, PersistError> {
    if schema.version != SCHEMA_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: schema.version,
            supported: SCHEMA_VERSION,
        });
    }

    let t = schema.tree;
    let n_nodes = t.num_nodes as usize;
    check_len("split_attributes", n_nodes, t.split_attributes.len())?;
    check_len("thresholds", n_nodes, t.thresholds.len())?;
    check_len("children_left", n_nodes, t.children_left.len())?;
    check_len("children_right", n_nodes, t.children_right.len())?;
    check_len("is_leaf", n_nodes, t.is_leaf.len())?;
    check_len("labels", n_nodes, t.labels.len())?;

    let labels = t
        .labels
        .iter()
        .enumerate()
        .map(|(index, &code)| {
            Label::from_code(code).ok_or(PersistError::InvalidLabelCode { index, code })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let tree = Tree::new(
        t.split_attributes,
        t.thresholds,
        t.children_left,
        t.children_right,
        t.is_leaf,
        labels,
        t.max_depth,
        schema.meta.num_attributes,
    );
    tree.validate()?;

    let mut meta = ModelMeta::new(schema.meta.num_attributes as usize);
    meta.attribute_names = schema.meta.attribute_names;

    Ok(TreeModel::from_parts(tree, meta, TreeConfig::default()))
}

// =============================================================================
// JSON I/O
// =============================================================================

/// Serialize a model as JSON into a writer.
pub fn write_json<W: Write>(model: &TreeModel, writer: W) -> Result<(), PersistError> {
    serde_json::to_writer(writer, &to_schema(model))?;
    Ok(())
}

/// Deserialize a model from a JSON reader.
pub fn read_json<R: Read>(reader: R) -> Result<TreeModel, PersistError> {
    let schema: ModelSchema = serde_json::from_reader(reader)?;
    from_schema(schema)
}

/// Save a model as a JSON artifact on disk.
pub fn save_json(model: &TreeModel, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let file = File::create(path)?;
    write_json(model, BufWriter::new(file))
}

/// Load a model from a JSON artifact on disk.
pub fn load_json(path: impl AsRef<Path>) -> Result<TreeModel, PersistError> {
    let file = File::open(path)?;
    read_json(BufReader::new(file))
}
