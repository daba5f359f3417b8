//! Greedy recursive tree induction.

use tracing::{debug, instrument};

use crate::entity::Entity;
use crate::entropy::{entropy, label_counts, majority_label};
use crate::error::TreeError;
use crate::feature::{Feature, FeatureRegistry, Split};
use crate::node::TreeNode;

/// Configuration and entry point for decision-tree induction.
///
/// Construct via [`TreeBuilder::new`] with a populated registry, then
/// chain `with_*` methods.
///
/// # Defaults
///
/// | Parameter      | Default | Meaning                                        |
/// |----------------|---------|------------------------------------------------|
/// | `min_entities` | 10      | stop when a subset has fewer entities          |
/// | `min_entropy`  | 0.10    | stop when a subset's label entropy drops below |
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    registry: FeatureRegistry,
    min_entities: usize,
    min_entropy: f64,
}

impl TreeBuilder {
    /// Create a builder over the given feature registry with default
    /// stopping thresholds.
    #[must_use]
    pub fn new(registry: FeatureRegistry) -> Self {
        Self {
            registry,
            min_entities: 10,
            min_entropy: 0.10,
        }
    }

    /// Set the minimum entity count required to keep splitting.
    #[must_use]
    pub fn with_min_entities(mut self, min_entities: usize) -> Self {
        self.min_entities = min_entities;
        self
    }

    /// Set the minimum label entropy required to keep splitting.
    #[must_use]
    pub fn with_min_entropy(mut self, min_entropy: f64) -> Self {
        self.min_entropy = min_entropy;
        self
    }

    /// Return the feature registry.
    #[must_use]
    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    /// Return the minimum entity count threshold.
    #[must_use]
    pub fn min_entities(&self) -> usize {
        self.min_entities
    }

    /// Return the minimum entropy threshold.
    #[must_use]
    pub fn min_entropy(&self) -> f64 {
        self.min_entropy
    }

    /// Induce a decision tree from the full entity set.
    ///
    /// Returns `Ok(None)` when the root set already satisfies a
    /// stopping rule or no registered feature discriminates — the
    /// caller decides whether a treeless outcome is acceptable.
    ///
    /// Identical entities and identical registration order produce an
    /// identical tree: features are tried in registration order and a
    /// weighted-entropy tie keeps the earlier feature.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyDataset`] when `entities` is empty.
    #[instrument(skip_all, fields(n_entities = entities.len(), n_features = self.registry.len()))]
    pub fn build(&self, entities: &[Entity]) -> Result<Option<TreeNode>, TreeError> {
        if entities.is_empty() {
            return Err(TreeError::EmptyDataset);
        }
        let subset: Vec<usize> = (0..entities.len()).collect();
        let root = self.grow(entities, &subset, 0);
        debug!(
            built = root.is_some(),
            n_nodes = root.as_ref().map_or(0, TreeNode::n_nodes),
            "induction finished"
        );
        Ok(root)
    }

    /// Grow one node over a non-empty subset.
    ///
    /// `None` means "no split worth making here"; the parent turns the
    /// subset into a majority-label leaf. Every recursive call receives
    /// a proper, smaller subset, so recursion terminates.
    fn grow(&self, entities: &[Entity], subset: &[usize], depth: usize) -> Option<TreeNode> {
        let counts = label_counts(entities, subset);
        let count_values: Vec<usize> = counts.iter().map(|&(_, c)| c).collect();
        let subset_entropy = entropy(&count_values);
        debug!(depth, n = subset.len(), entropy = subset_entropy, "growing node");

        if subset_entropy < self.min_entropy {
            debug!(depth, "entropy below threshold, stopping");
            return None;
        }
        if subset.len() < self.min_entities {
            debug!(depth, "too few entities, stopping");
            return None;
        }

        // Winner-take-all over all registered features; a feature that
        // cannot split this subset is simply not a candidate.
        let mut best: Option<(&Feature, Split)> = None;
        for feature in self.registry.iter() {
            let Some(split) = feature.split(entities, subset) else {
                continue;
            };
            if best
                .as_ref()
                .is_none_or(|(_, b)| split.weighted_entropy < b.weighted_entropy)
            {
                best = Some((feature, split));
            }
        }
        let Some((feature, split)) = best else {
            debug!(depth, "no discriminating feature, stopping");
            return None;
        };
        debug!(
            depth,
            feature = %feature,
            weighted_entropy = split.weighted_entropy,
            n_partitions = split.partitions.len(),
            "feature selected"
        );

        let default = majority_label(&counts).clone();
        let children = split
            .partitions
            .into_iter()
            .map(|(value, child_subset)| {
                let child = self.grow(entities, &child_subset, depth + 1).unwrap_or_else(|| {
                    let child_counts = label_counts(entities, &child_subset);
                    TreeNode::Leaf {
                        label: majority_label(&child_counts).clone(),
                    }
                });
                (value, child)
            })
            .collect();

        Some(TreeNode::Branch {
            feature: feature.clone(),
            arg: split.arg,
            default,
            children,
        })
    }
}
