//! Delimited-text ingestion with per-attribute coarsening.
//!
//! Raw rows carry floating-point measurements; training operates on values
//! rounded to a fixed nearest-multiple granularity per attribute (for
//! example nearest-2 for most attributes, nearest-4 for one). This module
//! performs that normalization while loading: fields are trimmed, parsed,
//! coarsened, and assembled into a [`Dataset`].

use std::fs;
use std::path::Path;

use super::{Dataset, DatasetError, Label};

// =============================================================================
// IngestSchema
// =============================================================================

/// Layout of a delimited source file.
///
/// Attributes are read from the first `granularities.len()` columns, each
/// rounded to the nearest multiple of its granularity (granularity 1 keeps
/// plain integers). The label is read from `label_column`, which may sit
/// past unused trailing columns; codes > 0 decode to [`Label::Pos`],
/// everything else to [`Label::Neg`].
#[derive(Debug, Clone)]
pub struct IngestSchema {
    /// Rounding granularity per attribute column.
    pub granularities: Vec<u32>,
    /// Zero-based column index of the class label.
    pub label_column: usize,
}

impl IngestSchema {
    /// Number of attribute columns this schema reads.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.granularities.len()
    }

    /// Minimum number of columns a row must have.
    fn min_columns(&self) -> usize {
        self.n_attributes().max(self.label_column + 1)
    }
}

/// Round a raw measurement to the nearest multiple of `multiple`.
///
/// Exact halfway values round to the nearest even multiple, so 5.0 at
/// granularity 2 coarsens to 4 and 7.0 to 8. A granularity of 0 is
/// treated as 1 (no coarsening).
#[inline]
pub fn round_to_multiple(value: f64, multiple: u32) -> i32 {
    let m = multiple.max(1) as f64;
    ((value / m).round_ties_even() * m) as i32
}

// =============================================================================
// IngestError
// =============================================================================

/// Errors while loading a delimited source.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read source file")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected at least {expected} columns, got {got}")]
    MissingColumns {
        line: usize,
        expected: usize,
        got: usize,
    },
    #[error("line {line}, column {column}: cannot parse {value:?} as a number")]
    InvalidNumber {
        line: usize,
        column: usize,
        value: String,
    },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

// =============================================================================
// Loading
// =============================================================================

/// Parse delimited text (comma-separated, first line is a header).
pub fn parse_delimited(text: &str, schema: &IngestSchema) -> Result<Dataset, IngestError> {
    let n_attributes = schema.n_attributes();
    let mut values = Vec::new();
    let mut labels = Vec::new();

    // Line numbers are 1-based; line 1 is the header.
    for (line_no, line) in text.lines().enumerate().skip(1) {
        let line_no = line_no + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < schema.min_columns() {
            return Err(IngestError::MissingColumns {
                line: line_no,
                expected: schema.min_columns(),
                got: fields.len(),
            });
        }

        for (column, &granularity) in schema.granularities.iter().enumerate() {
            let field = fields[column].trim();
            let raw: f64 = field.parse().map_err(|_| IngestError::InvalidNumber {
                line: line_no,
                column,
                value: field.to_string(),
            })?;
            values.push(round_to_multiple(raw, granularity));
        }

        let field = fields[schema.label_column].trim();
        let code: i32 = field.parse().map_err(|_| IngestError::InvalidNumber {
            line: line_no,
            column: schema.label_column,
            value: field.to_string(),
        })?;
        labels.push(if code > 0 { Label::Pos } else { Label::Neg });
    }

    let n_records = labels.len();
    Ok(Dataset::from_vec(values, n_records, n_attributes, labels)?)
}

/// Read and parse a delimited file from disk.
pub fn load_csv(path: impl AsRef<Path>, schema: &IngestSchema) -> Result<Dataset, IngestError> {
    let text = fs::read_to_string(path)?;
    parse_delimited(&text, schema)
}
