//! Mutable tree under construction during training.
//!
//! The builder grows nodes lazily, only for positions the training data
//! actually reaches; there is no pre-allocated complete-binary-tree layout.
//! Once training finishes the tree is frozen into the immutable [`Tree`].

use crate::data::Label;

use super::{NodeId, Tree};

/// Placeholder child pointer for a node whose split has not been applied.
const PENDING: u32 = u32::MAX;

/// Append-only tree storage used by the tree builder.
///
/// Every node starts life as a leaf with sentinel split values; applying a
/// split turns it into a decision node and allocates its two children.
#[derive(Debug, Default)]
pub struct MutableTree {
    split_attributes: Vec<u32>,
    split_thresholds: Vec<i32>,
    left_children: Vec<u32>,
    right_children: Vec<u32>,
    is_leaf: Vec<bool>,
    labels: Vec<Label>,
}

impl MutableTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocated nodes.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.is_leaf.len()
    }

    fn push_node(&mut self) -> NodeId {
        let id = self.n_nodes() as NodeId;
        self.split_attributes.push(0);
        self.split_thresholds.push(0);
        self.left_children.push(PENDING);
        self.right_children.push(PENDING);
        self.is_leaf.push(true);
        self.labels.push(Label::Neg);
        id
    }

    /// Allocate the root node. Must be called exactly once, first.
    pub fn init_root(&mut self) -> NodeId {
        debug_assert_eq!(self.n_nodes(), 0, "root must be the first node");
        self.push_node()
    }

    /// Turn `node` into a decision node and allocate its children.
    ///
    /// The node keeps `label` as the majority label of its record set.
    /// Returns `(left, right)` child ids.
    pub fn apply_split(
        &mut self,
        node: NodeId,
        attribute: u32,
        threshold: i32,
        label: Label,
    ) -> (NodeId, NodeId) {
        let left = self.push_node();
        let right = self.push_node();

        let n = node as usize;
        self.split_attributes[n] = attribute;
        self.split_thresholds[n] = threshold;
        self.left_children[n] = left;
        self.right_children[n] = right;
        self.is_leaf[n] = false;
        self.labels[n] = label;

        (left, right)
    }

    /// Finalize `node` as a leaf carrying `label`.
    pub fn make_leaf(&mut self, node: NodeId, label: Label) {
        let n = node as usize;
        debug_assert!(self.is_leaf[n], "cannot turn a decision node back into a leaf");
        self.labels[n] = label;
    }

    /// Freeze into an immutable [`Tree`].
    ///
    /// `max_depth` is the maximum depth the builder actually reached;
    /// `n_attributes` is the attribute count of the training layout.
    pub fn freeze(self, max_depth: u32, n_attributes: u32) -> Tree {
        debug_assert!(
            self.left_children
                .iter()
                .zip(&self.is_leaf)
                .all(|(&child, &leaf)| leaf || child != PENDING),
            "decision node with unresolved children"
        );

        // Leaves keep sentinel children pointing at themselves so the frozen
        // arrays contain no out-of-bounds indices.
        let left_children = self
            .left_children
            .iter()
            .enumerate()
            .map(|(i, &child)| if child == PENDING { i as u32 } else { child })
            .collect();
        let right_children = self
            .right_children
            .iter()
            .enumerate()
            .map(|(i, &child)| if child == PENDING { i as u32 } else { child })
            .collect();

        Tree::new(
            self.split_attributes,
            self.split_thresholds,
            left_children,
            right_children,
            self.is_leaf,
            self.labels,
            max_depth,
            n_attributes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_nodes_lazily() {
        let mut tree = MutableTree::new();
        let root = tree.init_root();
        assert_eq!(tree.n_nodes(), 1);

        let (left, right) = tree.apply_split(root, 2, 10, Label::Pos);
        assert_eq!(tree.n_nodes(), 3);
        assert_ne!(left, right);

        tree.make_leaf(left, Label::Neg);
        tree.make_leaf(right, Label::Pos);

        let frozen = tree.freeze(1, 3);
        assert_eq!(frozen.n_nodes(), 3);
        assert!(!frozen.is_leaf(root));
        assert_eq!(frozen.split_attribute(root), 2);
        assert_eq!(frozen.split_threshold(root), 10);
        assert_eq!(frozen.label(left), Label::Neg);
        assert_eq!(frozen.label(right), Label::Pos);
        assert_eq!(frozen.validate(), Ok(()));
    }

    #[test]
    fn single_leaf_tree() {
        let mut tree = MutableTree::new();
        let root = tree.init_root();
        tree.make_leaf(root, Label::Pos);
        let frozen = tree.freeze(0, 4);

        assert_eq!(frozen.n_nodes(), 1);
        assert!(frozen.is_leaf(root));
        // Leaf sentinels: attribute 0, threshold 0, children resolved in-bounds.
        assert_eq!(frozen.split_attribute(root), 0);
        assert_eq!(frozen.split_threshold(root), 0);
        assert_eq!(frozen.validate(), Ok(()));
    }
}
