//! Labeled training data and attribute metadata.
//!
//! - [`Dataset`]: Validated, immutable records (integer attributes + binary labels)
//! - [`Label`]: The two-class target
//! - [`AttributeRanges`]: Per-attribute observed (min, max), used to enumerate
//!   candidate thresholds
//! - [`ingest`]: Delimited-text loading with per-attribute coarsening

mod columns;
mod dataset;
pub mod ingest;

pub use columns::AttributeRanges;
pub use dataset::{Dataset, DatasetError, Label};
pub use ingest::{IngestError, IngestSchema};
