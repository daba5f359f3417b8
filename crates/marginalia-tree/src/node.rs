//! The induced tree: branch and leaf nodes.

use crate::entity::Label;
use crate::feature::{BranchValue, Feature, SplitArg};

/// A node in an induced decision tree.
///
/// Trees are finite, acyclic, and immutable after induction. A
/// branch's children are exactly the partitions its feature produced
/// during training, kept as an ordered `(branch value, child)` list in
/// partition order so that identical inputs always produce identical
/// trees. The branch also records the majority label of the subset it
/// was built from; classification falls back to it when an entity
/// routes to a branch value unseen during training.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// An interior decision node.
    Branch {
        /// The feature this branch splits on.
        feature: Feature,
        /// Argument needed to replay the split on one entity.
        arg: SplitArg,
        /// Majority label of the training subset; the unseen-value fallback.
        default: Label,
        /// Child nodes keyed by branch value, in partition order.
        children: Vec<(BranchValue, TreeNode)>,
    },
    /// A terminal prediction node.
    Leaf {
        /// The predicted label.
        label: Label,
    },
}

impl TreeNode {
    /// Return `true` if this node is a leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Look up the child for a branch value.
    ///
    /// Returns `None` on a leaf or when the value was never seen
    /// during training.
    #[must_use]
    pub fn child(&self, value: &BranchValue) -> Option<&TreeNode> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Branch { children, .. } => children
                .iter()
                .find(|(v, _)| v == value)
                .map(|(_, child)| child),
        }
    }

    /// Return the total number of nodes in this subtree.
    #[must_use]
    pub fn n_nodes(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Branch { children, .. } => {
                1 + children.iter().map(|(_, c)| c.n_nodes()).sum::<usize>()
            }
        }
    }

    /// Return the number of leaves in this subtree.
    #[must_use]
    pub fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Branch { children, .. } => {
                children.iter().map(|(_, c)| c.n_leaves()).sum()
            }
        }
    }

    /// Return the depth of this subtree. A bare leaf has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Branch { children, .. } => {
                1 + children.iter().map(|(_, c)| c.depth()).max().unwrap_or(0)
            }
        }
    }
}
