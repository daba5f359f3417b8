//! Decision-tree classification of labeled comment records.
//!
//! Provides a hand-rolled entropy-driven decision tree: discrete,
//! membership, and quantitative feature splits, greedy recursive
//! induction, a language-neutral JSON tree format, and
//! precision/recall/F1 evaluation.

mod builder;
mod codec;
mod entity;
mod entropy;
mod error;
mod eval;
mod feature;
mod node;

pub use builder::TreeBuilder;
pub use codec::{export, import};
pub use entity::{Entity, Label};
pub use entropy::{dataset_entropy, entropy, label_counts, majority_label};
pub use error::TreeError;
pub use eval::{Evaluation, LabelMetrics, classify, score_all};
pub use feature::{BranchValue, Feature, FeatureRegistry, Split, SplitArg};
pub use node::TreeNode;
