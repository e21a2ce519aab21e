//! Greedy depth-first tree construction.

use crate::data::{AttributeRanges, Dataset, Label};
use crate::repr::{MutableTree, NodeId, Tree};

use super::logger::{TrainingLogger, Verbosity};
use super::majority::majority_vote;
use super::split::{find_best_split, partition};

// =============================================================================
// TreeParams
// =============================================================================

/// Stopping criteria for tree construction.
#[derive(Debug, Clone)]
pub struct TreeParams {
    /// Depth cap: decision nodes exist only at depths below this; every
    /// node at this depth is a leaf. Default 10 (11 levels total).
    pub max_depth: u32,
    /// A node with fewer records than this becomes a leaf. Default 9.
    pub min_split_samples: u32,
    /// A node whose majority proportion strictly exceeds this becomes a
    /// leaf. Default 0.95.
    pub purity_threshold: f64,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: 10,
            min_split_samples: 9,
            purity_threshold: 0.95,
        }
    }
}

// =============================================================================
// TreeBuilder
// =============================================================================

/// Depth-first tree builder.
///
/// Owns the tree under construction exclusively; the finished [`Tree`] is
/// handed off immutable. Construction is single-threaded and fully
/// deterministic: nodes are discovered in attribute-then-threshold order
/// and children are grown left before right. Pending subtrees are kept on
/// an explicit work stack, so heap capacity is the only bound on the
/// depth cap; degenerate data can legitimately chain one decision node
/// per level all the way down.
///
/// Precondition: the dataset is non-empty with at least one attribute
/// column, which [`Dataset`]'s constructor guarantees.
pub struct TreeBuilder<'a> {
    dataset: &'a Dataset,
    ranges: AttributeRanges,
    params: TreeParams,
    logger: TrainingLogger,
    tree: MutableTree,
    max_depth_reached: u32,
}

/// One subtree waiting to be grown: its node, record subset, and depth.
struct GrowTask {
    node: NodeId,
    rows: Vec<u32>,
    depth: u32,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(dataset: &'a Dataset, params: TreeParams, verbosity: Verbosity) -> Self {
        Self {
            ranges: AttributeRanges::from_dataset(dataset),
            dataset,
            params,
            logger: TrainingLogger::new(verbosity),
            tree: MutableTree::new(),
            max_depth_reached: 0,
        }
    }

    /// Build the tree from the full training set.
    pub fn build(mut self) -> Tree {
        self.logger
            .start_training(self.dataset.n_records(), self.dataset.n_attributes());

        let rows: Vec<u32> = (0..self.dataset.n_records() as u32).collect();
        let root = self.tree.init_root();

        // LIFO order with the right child pushed first reproduces the
        // left-before-right preorder, so node ids are assigned exactly as
        // a recursive descent would assign them.
        let mut pending = vec![GrowTask { node: root, rows, depth: 0 }];
        while let Some(task) = pending.pop() {
            self.grow(task, &mut pending);
        }

        let max_depth = self.max_depth_reached;
        let tree = self.tree.freeze(max_depth, self.dataset.n_attributes() as u32);
        self.logger
            .finish_training(tree.n_nodes(), tree.n_leaves(), max_depth);
        tree
    }

    /// Grow one node from a non-empty record subset, queueing its children.
    fn grow(&mut self, task: GrowTask, pending: &mut Vec<GrowTask>) {
        let GrowTask { node, rows, depth } = task;
        debug_assert!(!rows.is_empty(), "grow requires a non-empty record set");
        self.max_depth_reached = self.max_depth_reached.max(depth);

        let Some(majority) = majority_vote(rows.iter().map(|&r| self.dataset.label(r as usize)))
        else {
            // Unreachable given the non-empty precondition; keep the
            // pre-allocated leaf untouched.
            return;
        };

        // Stopping check: depth cap, minimum record count, purity.
        if depth >= self.params.max_depth
            || (rows.len() as u32) < self.params.min_split_samples
            || majority.proportion > self.params.purity_threshold
        {
            self.tree.make_leaf(node, majority.label);
            self.logger.log_leaf(depth, rows.len(), &majority);
            return;
        }

        let split = find_best_split(self.dataset, &rows, &self.ranges);
        self.logger.log_split(depth, rows.len(), &split);

        let (left_rows, right_rows) = partition(self.dataset, &rows, split.attribute, split.threshold);
        let (left, right) =
            self.tree
                .apply_split(node, split.attribute as u32, split.threshold, majority.label);

        self.queue_child(pending, right, right_rows, depth + 1, majority.label);
        self.queue_child(pending, left, left_rows, depth + 1, majority.label);
    }

    /// Queue a child for growth, or seal it as a leaf when its partition is
    /// empty (the winning threshold sent every record the other way; the
    /// position is only reachable by out-of-range future records, which
    /// then inherit the parent's majority label).
    fn queue_child(
        &mut self,
        pending: &mut Vec<GrowTask>,
        node: NodeId,
        rows: Vec<u32>,
        depth: u32,
        parent_label: Label,
    ) {
        if rows.is_empty() {
            self.max_depth_reached = self.max_depth_reached.max(depth);
            self.tree.make_leaf(node, parent_label);
        } else {
            pending.push(GrowTask { node, rows, depth });
        }
    }
}
