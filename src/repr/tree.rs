//! Canonical immutable tree storage (SoA).
//!
//! Stores nodes in flat parallel arrays for cache-friendly traversal.
//! Leaves keep sentinel split values (attribute 0, threshold 0); the
//! `is_leaf` flag is authoritative. Every node, decision or leaf, carries
//! the majority label of the record set it was grown from, so a prediction
//! is always available at any depth.

// Allow many constructor arguments for creating trees with all their fields.
#![allow(clippy::too_many_arguments)]

use ndarray::ArrayView1;

use crate::data::Label;

use super::NodeId;

// ============================================================================
// TreeValidationError
// ============================================================================

/// Structural validation errors for [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeValidationError {
    /// Tree has no nodes.
    #[error("tree has no nodes")]
    EmptyTree,
    /// A child pointer references an out-of-bounds node.
    #[error("{side} child {child} of node {node} is out of bounds (n_nodes = {n_nodes})")]
    ChildOutOfBounds {
        node: NodeId,
        side: &'static str,
        child: NodeId,
        n_nodes: usize,
    },
    /// A node references itself as a child.
    #[error("node {node} references itself as a child")]
    SelfLoop { node: NodeId },
    /// A node was reached by more than one path (DAG shape).
    #[error("node {node} was reached by more than one path")]
    DuplicateVisit { node: NodeId },
    /// A cycle was detected during traversal.
    #[error("cycle detected at node {node}")]
    CycleDetected { node: NodeId },
    /// A node exists in storage but is unreachable from the root.
    #[error("node {node} is unreachable from the root")]
    UnreachableNode { node: NodeId },
    /// A split node references an attribute outside the trained layout.
    #[error("node {node} splits on attribute {attribute}, but the tree has {n_attributes} attributes")]
    AttributeOutOfBounds {
        node: NodeId,
        attribute: u32,
        n_attributes: u32,
    },
    /// Recorded maximum depth disagrees with the actual structure.
    #[error("recorded max depth {recorded} does not match actual depth {actual}")]
    DepthMismatch { recorded: u32, actual: u32 },
}

// ============================================================================
// Tree
// ============================================================================

/// Immutable binary decision tree.
///
/// Built once per training run via [`MutableTree::freeze`] and handed off
/// read-only to inference and persistence.
///
/// [`MutableTree::freeze`]: super::MutableTree::freeze
#[derive(Debug, Clone)]
pub struct Tree {
    split_attributes: Box<[u32]>,
    split_thresholds: Box<[i32]>,
    left_children: Box<[u32]>,
    right_children: Box<[u32]>,
    is_leaf: Box<[bool]>,
    labels: Box<[Label]>,
    /// Maximum depth actually reached during training (root = 0).
    max_depth: u32,
    /// Attribute count of the training layout.
    n_attributes: u32,
}

impl Tree {
    /// Create a tree from parallel arrays.
    ///
    /// All arrays must have the same length (number of nodes); callers that
    /// assemble arrays from untrusted input should follow up with
    /// [`validate`](Self::validate).
    pub fn new(
        split_attributes: Vec<u32>,
        split_thresholds: Vec<i32>,
        left_children: Vec<u32>,
        right_children: Vec<u32>,
        is_leaf: Vec<bool>,
        labels: Vec<Label>,
        max_depth: u32,
        n_attributes: u32,
    ) -> Self {
        let n_nodes = split_attributes.len();
        debug_assert_eq!(n_nodes, split_thresholds.len());
        debug_assert_eq!(n_nodes, left_children.len());
        debug_assert_eq!(n_nodes, right_children.len());
        debug_assert_eq!(n_nodes, is_leaf.len());
        debug_assert_eq!(n_nodes, labels.len());

        Self {
            split_attributes: split_attributes.into_boxed_slice(),
            split_thresholds: split_thresholds.into_boxed_slice(),
            left_children: left_children.into_boxed_slice(),
            right_children: right_children.into_boxed_slice(),
            is_leaf: is_leaf.into_boxed_slice(),
            labels: labels.into_boxed_slice(),
            max_depth,
            n_attributes,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of nodes in the tree.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.is_leaf.len()
    }

    /// Number of leaf nodes.
    pub fn n_leaves(&self) -> usize {
        self.is_leaf.iter().filter(|&&leaf| leaf).count()
    }

    /// Check if a node is a leaf.
    #[inline]
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.is_leaf[node as usize]
    }

    /// Attribute index tested at a decision node (sentinel 0 at leaves).
    #[inline]
    pub fn split_attribute(&self, node: NodeId) -> u32 {
        self.split_attributes[node as usize]
    }

    /// Threshold tested at a decision node (sentinel 0 at leaves).
    #[inline]
    pub fn split_threshold(&self, node: NodeId) -> i32 {
        self.split_thresholds[node as usize]
    }

    /// Left child (taken when `value <= threshold`).
    #[inline]
    pub fn left_child(&self, node: NodeId) -> NodeId {
        self.left_children[node as usize]
    }

    /// Right child (taken when `value > threshold`).
    #[inline]
    pub fn right_child(&self, node: NodeId) -> NodeId {
        self.right_children[node as usize]
    }

    /// Majority label at a node. Authoritative for leaves.
    #[inline]
    pub fn label(&self, node: NodeId) -> Label {
        self.labels[node as usize]
    }

    /// Maximum depth actually reached during training (root = 0).
    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Attribute count of the training layout.
    #[inline]
    pub fn n_attributes(&self) -> u32 {
        self.n_attributes
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Traverse from the root to the leaf this record falls into.
    ///
    /// At each decision node the record's designated attribute is compared
    /// against the node's threshold: `<=` branches left, `>` branches right.
    #[inline]
    pub fn traverse_to_leaf(&self, record: ArrayView1<'_, i32>) -> NodeId {
        let mut node: NodeId = 0;
        while !self.is_leaf(node) {
            let attribute = self.split_attribute(node) as usize;
            node = if record[attribute] <= self.split_threshold(node) {
                self.left_child(node)
            } else {
                self.right_child(node)
            };
        }
        node
    }

    /// Classify a single record.
    pub fn predict_row(&self, record: ArrayView1<'_, i32>) -> Label {
        self.label(self.traverse_to_leaf(record))
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validate structural invariants for this tree.
    ///
    /// Intended for debug checks, tests, and deserialized artifacts.
    pub fn validate(&self) -> Result<(), TreeValidationError> {
        let n_nodes = self.n_nodes();
        if n_nodes == 0 {
            return Err(TreeValidationError::EmptyTree);
        }

        // Iterative DFS with color marking.
        // 0 = unvisited, 1 = visiting, 2 = done
        let mut color = vec![0u8; n_nodes];
        let mut stack: Vec<(NodeId, u32, u8)> = vec![(0, 0, 0)];
        let mut actual_depth: u32 = 0;

        while let Some((node, depth, phase)) = stack.pop() {
            let node_usize = node as usize;

            match phase {
                0 => {
                    match color[node_usize] {
                        0 => {}
                        1 => return Err(TreeValidationError::CycleDetected { node }),
                        _ => return Err(TreeValidationError::DuplicateVisit { node }),
                    }

                    color[node_usize] = 1;
                    stack.push((node, depth, 1));
                    actual_depth = actual_depth.max(depth);

                    if !self.is_leaf(node) {
                        let attribute = self.split_attribute(node);
                        if attribute >= self.n_attributes {
                            return Err(TreeValidationError::AttributeOutOfBounds {
                                node,
                                attribute,
                                n_attributes: self.n_attributes,
                            });
                        }

                        let left = self.left_child(node);
                        let right = self.right_child(node);

                        if left == node || right == node {
                            return Err(TreeValidationError::SelfLoop { node });
                        }
                        if left as usize >= n_nodes {
                            return Err(TreeValidationError::ChildOutOfBounds {
                                node,
                                side: "left",
                                child: left,
                                n_nodes,
                            });
                        }
                        if right as usize >= n_nodes {
                            return Err(TreeValidationError::ChildOutOfBounds {
                                node,
                                side: "right",
                                child: right,
                                n_nodes,
                            });
                        }

                        stack.push((right, depth + 1, 0));
                        stack.push((left, depth + 1, 0));
                    }
                }
                _ => {
                    color[node_usize] = 2;
                }
            }
        }

        for (i, &c) in color.iter().enumerate() {
            if c == 0 {
                return Err(TreeValidationError::UnreachableNode { node: i as u32 });
            }
        }

        if actual_depth != self.max_depth {
            return Err(TreeValidationError::DepthMismatch {
                recorded: self.max_depth,
                actual: actual_depth,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::MutableTree;
    use ndarray::aview1;

    fn stump() -> Tree {
        // root: attr 0 <= 4 -> Neg leaf, else Pos leaf
        let mut tree = MutableTree::new();
        let root = tree.init_root();
        let (left, right) = tree.apply_split(root, 0, 4, Label::Pos);
        tree.make_leaf(left, Label::Neg);
        tree.make_leaf(right, Label::Pos);
        tree.freeze(1, 1)
    }

    #[test]
    fn predict_simple_stump() {
        let tree = stump();
        assert_eq!(tree.predict_row(aview1(&[2])), Label::Neg);
        assert_eq!(tree.predict_row(aview1(&[4])), Label::Neg);
        assert_eq!(tree.predict_row(aview1(&[5])), Label::Pos);
    }

    #[test]
    fn counts_nodes_and_leaves() {
        let tree = stump();
        assert_eq!(tree.n_nodes(), 3);
        assert_eq!(tree.n_leaves(), 2);
        assert_eq!(tree.max_depth(), 1);
        assert!(!tree.is_leaf(0));
        assert!(tree.is_leaf(tree.left_child(0)));
    }

    #[test]
    fn validate_accepts_trained_shape() {
        assert_eq!(stump().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_out_of_bounds_child() {
        let tree = Tree::new(
            vec![0, 0],
            vec![4, 0],
            vec![1, 0],
            vec![9, 0], // right child 9 does not exist
            vec![false, true],
            vec![Label::Pos, Label::Neg],
            1,
            1,
        );
        assert!(matches!(
            tree.validate(),
            Err(TreeValidationError::ChildOutOfBounds { side: "right", child: 9, .. })
        ));
    }

    #[test]
    fn validate_rejects_self_loop() {
        let tree = Tree::new(
            vec![0],
            vec![4],
            vec![0],
            vec![0],
            vec![false],
            vec![Label::Pos],
            0,
            1,
        );
        assert!(matches!(tree.validate(), Err(TreeValidationError::SelfLoop { node: 0 })));
    }

    #[test]
    fn validate_rejects_unreachable_node() {
        let tree = Tree::new(
            vec![0, 0],
            vec![0, 0],
            vec![0, 0],
            vec![0, 0],
            vec![true, true], // node 1 is never referenced
            vec![Label::Neg, Label::Pos],
            0,
            1,
        );
        assert!(matches!(
            tree.validate(),
            Err(TreeValidationError::UnreachableNode { node: 1 })
        ));
    }

    #[test]
    fn validate_rejects_depth_mismatch() {
        let mut tree = MutableTree::new();
        let root = tree.init_root();
        let (left, right) = tree.apply_split(root, 0, 4, Label::Pos);
        tree.make_leaf(left, Label::Neg);
        tree.make_leaf(right, Label::Pos);
        let tree = tree.freeze(3, 1); // recorded depth is wrong
        assert_eq!(
            tree.validate(),
            Err(TreeValidationError::DepthMismatch { recorded: 3, actual: 1 })
        );
    }

    #[test]
    fn validate_rejects_attribute_out_of_bounds() {
        let tree = Tree::new(
            vec![5, 0, 0],
            vec![4, 0, 0],
            vec![1, 0, 0],
            vec![2, 0, 0],
            vec![false, true, true],
            vec![Label::Pos, Label::Neg, Label::Pos],
            1,
            2,
        );
        assert!(matches!(
            tree.validate(),
            Err(TreeValidationError::AttributeOutOfBounds { attribute: 5, .. })
        ));
    }
}
