//! Structured training output.
//!
//! Thin wrapper over the `log` facade so library users control the sink;
//! verbosity gates what gets emitted independently of the global filter.

use super::majority::Majority;
use super::split::SplitCandidate;

/// How much training output to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Start/finish summaries.
    Info,
    /// Per-node split and leaf decisions.
    Debug,
}

/// Logger threaded through the tree builder.
#[derive(Debug, Clone, Copy)]
pub struct TrainingLogger {
    verbosity: Verbosity,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn start_training(&self, n_records: usize, n_attributes: usize) {
        if self.verbosity >= Verbosity::Info {
            log::info!("training decision tree on {n_records} records x {n_attributes} attributes");
        }
    }

    pub fn log_split(&self, depth: u32, n_records: usize, split: &SplitCandidate) {
        if self.verbosity >= Verbosity::Debug {
            log::debug!(
                "depth {depth}: split {n_records} records on attribute {} <= {} (weighted entropy {:.4})",
                split.attribute,
                split.threshold,
                split.weighted_entropy
            );
        }
    }

    pub fn log_leaf(&self, depth: u32, n_records: usize, majority: &Majority) {
        if self.verbosity >= Verbosity::Debug {
            log::debug!(
                "depth {depth}: leaf over {n_records} records, label {:?} ({:.1}%)",
                majority.label,
                majority.proportion * 100.0
            );
        }
    }

    pub fn finish_training(&self, n_nodes: usize, n_leaves: usize, max_depth: u32) {
        if self.verbosity >= Verbosity::Info {
            log::info!("built tree: {n_nodes} nodes, {n_leaves} leaves, max depth {max_depth}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_is_ordered() {
        assert!(Verbosity::Silent < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
        assert_eq!(Verbosity::default(), Verbosity::Silent);
    }
}
