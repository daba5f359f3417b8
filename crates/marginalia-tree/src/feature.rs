//! Feature extraction and entropy-minimizing split proposals.
//!
//! A feature is a named rule that reads one attribute of an entity and
//! can partition a set of entities so that the weighted post-split
//! entropy of the label distribution is minimal. Splitting and
//! classification share one rule: the branch value a feature computed
//! for a subset during training is re-derived for a single entity by
//! [`Feature::identify`] with the stored split argument.

use std::collections::HashMap;
use std::fmt;

use crate::entity::Entity;
use crate::entropy::dataset_entropy;

/// The value labelling one outgoing edge of a branch node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BranchValue {
    /// An exact attribute value, or `lt`/`ge`/`un` for quantitative splits.
    Text(String),
    /// Membership test outcome: entity does / does not contain the token.
    Flag(bool),
    /// The attribute was absent from the entity.
    Absent,
}

impl fmt::Display for BranchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchValue::Text(s) => f.write_str(s),
            BranchValue::Flag(b) => write!(f, "{b}"),
            BranchValue::Absent => f.write_str("<absent>"),
        }
    }
}

/// The argument a branch stores so classification can replay its split.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitArg {
    /// Discrete splits need no argument.
    None,
    /// The token a membership split tests for.
    Token(String),
    /// The threshold a quantitative split compares against.
    Threshold(f64),
}

/// A candidate partition of an entity subset proposed by one feature.
///
/// `partitions` carries disjoint, non-empty index subsets that together
/// cover exactly the input subset, each tagged with the branch value
/// that routes an entity into it.
#[derive(Debug, Clone)]
pub struct Split {
    /// Weighted post-split entropy; lower is better.
    pub weighted_entropy: f64,
    /// Argument needed to replay this split on a single entity.
    pub arg: SplitArg,
    /// `(branch value, entity indices)` pairs, in discovery order.
    pub partitions: Vec<(BranchValue, Vec<usize>)>,
}

/// The closed set of feature variants.
///
/// A feature's identity is its wire name (see [`Feature::name`]),
/// which encodes the variant and the attribute it reads. Features are
/// stateless: `split` and `identify` may be called any number of
/// times, on any subsets, in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    /// Splits on the exact raw attribute value. Wire name `DF:attr`.
    Discrete {
        /// Attribute read from the entity.
        attr: String,
    },
    /// Splits on the `index`-th comma-token of the attribute.
    /// Wire name `DF{index}:attr`.
    DiscreteIndexed {
        /// Attribute read from the entity.
        attr: String,
        /// Zero-based token position.
        index: usize,
    },
    /// Splits on containment of the best single comma-token.
    /// Wire name `MF:attr`.
    Membership {
        /// Attribute read from the entity.
        attr: String,
    },
    /// Like `Membership`, restricted to the first `limit` comma-tokens.
    /// Wire name `MF{limit}:attr`.
    MembershipIndexed {
        /// Attribute read from the entity.
        attr: String,
        /// Number of leading tokens considered.
        limit: usize,
    },
    /// Splits on a numeric threshold; undefined values get their own
    /// branch. Wire name `QF:attr`.
    Quantitative {
        /// Attribute read from the entity.
        attr: String,
    },
}

/// Branch value for entities below a quantitative threshold.
const BELOW: &str = "lt";
/// Branch value for entities at or above a quantitative threshold.
const AT_OR_ABOVE: &str = "ge";
/// Branch value for entities with no defined numeric value.
const UNDEFINED: &str = "un";

impl Feature {
    /// Return the feature's wire name, used as its registry key and in
    /// serialized trees.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Feature::Discrete { attr } => format!("DF:{attr}"),
            Feature::DiscreteIndexed { attr, index } => format!("DF{index}:{attr}"),
            Feature::Membership { attr } => format!("MF:{attr}"),
            Feature::MembershipIndexed { attr, limit } => format!("MF{limit}:{attr}"),
            Feature::Quantitative { attr } => format!("QF:{attr}"),
        }
    }

    /// Return the attribute this feature reads.
    #[must_use]
    pub fn attr(&self) -> &str {
        match self {
            Feature::Discrete { attr }
            | Feature::DiscreteIndexed { attr, .. }
            | Feature::Membership { attr }
            | Feature::MembershipIndexed { attr, .. }
            | Feature::Quantitative { attr } => attr,
        }
    }

    /// Extract this feature's scalar view of an entity.
    ///
    /// `None` means the value is undefined for this entity: the
    /// attribute is absent, the indexed token does not exist, or (for
    /// quantitative features) the text does not parse as a number.
    /// Membership variants do not use this path; see
    /// [`tokens`](Self::tokens).
    #[must_use]
    pub fn extract<'e>(&self, entity: &'e Entity) -> Option<&'e str> {
        match self {
            Feature::Discrete { attr } | Feature::Membership { attr } => entity.get(attr),
            Feature::DiscreteIndexed { attr, index } => {
                entity.get(attr)?.split(',').nth(*index)
            }
            Feature::MembershipIndexed { attr, .. } => entity.get(attr),
            Feature::Quantitative { attr } => entity.get(attr),
        }
    }

    /// Return the comma-token view used by membership variants.
    ///
    /// Absent attributes yield an empty token list; an indexed variant
    /// keeps only the first `limit` tokens.
    fn tokens<'e>(&self, entity: &'e Entity) -> Vec<&'e str> {
        let Some(raw) = entity.get(self.attr()) else {
            return Vec::new();
        };
        let iter = raw.split(',');
        match self {
            Feature::MembershipIndexed { limit, .. } => iter.take(*limit).collect(),
            _ => iter.collect(),
        }
    }

    /// Numeric view for quantitative splits.
    fn numeric(&self, entity: &Entity) -> Option<f64> {
        self.extract(entity)?.parse().ok()
    }

    /// Propose the entropy-minimizing partition of `subset`.
    ///
    /// Returns `None` when this feature has no discriminating power on
    /// the subset: the subset holds fewer than two entities, or fewer
    /// than two non-empty partitions can be formed. The builder treats
    /// `None` as an expected outcome and drops the feature as a
    /// candidate at that node.
    #[must_use]
    pub fn split(&self, entities: &[Entity], subset: &[usize]) -> Option<Split> {
        if subset.len() < 2 {
            return None;
        }
        match self {
            Feature::Discrete { .. } | Feature::DiscreteIndexed { .. } => {
                self.split_discrete(entities, subset)
            }
            Feature::Membership { .. } | Feature::MembershipIndexed { .. } => {
                self.split_membership(entities, subset)
            }
            Feature::Quantitative { .. } => self.split_quantitative(entities, subset),
        }
    }

    /// Group by exact extracted value; every distinct value (absence
    /// included) becomes its own partition.
    fn split_discrete(&self, entities: &[Entity], subset: &[usize]) -> Option<Split> {
        let mut groups: Vec<(BranchValue, Vec<usize>)> = Vec::new();
        let mut positions: HashMap<Option<&str>, usize> = HashMap::new();
        for &i in subset {
            let value = self.extract(&entities[i]);
            match positions.get(&value) {
                Some(&pos) => groups[pos].1.push(i),
                None => {
                    positions.insert(value, groups.len());
                    let bv = match value {
                        Some(v) => BranchValue::Text(v.to_string()),
                        None => BranchValue::Absent,
                    };
                    groups.push((bv, vec![i]));
                }
            }
        }
        if groups.len() < 2 {
            return None;
        }
        let n = subset.len() as f64;
        let weighted_entropy = groups
            .iter()
            .map(|(_, g)| g.len() as f64 * dataset_entropy(entities, g))
            .sum::<f64>()
            / n;
        Some(Split {
            weighted_entropy,
            arg: SplitArg::None,
            partitions: groups,
        })
    }

    /// Try every distinct token as a contains/doesn't-contain split and
    /// keep the best, skipping tokens every entity contains.
    fn split_membership(&self, entities: &[Entity], subset: &[usize]) -> Option<Split> {
        // Candidate tokens with their member subsets, first-seen order.
        let mut candidates: Vec<(&str, Vec<usize>)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for &i in subset {
            for token in self.tokens(&entities[i]) {
                match positions.get(token) {
                    Some(&pos) => {
                        let members = &mut candidates[pos].1;
                        if members.last() != Some(&i) {
                            members.push(i);
                        }
                    }
                    None => {
                        positions.insert(token, candidates.len());
                        candidates.push((token, vec![i]));
                    }
                }
            }
        }

        let n = subset.len() as f64;
        let mut best: Option<(&str, f64)> = None;
        for (token, members) in &candidates {
            if members.len() == subset.len() {
                // Empty complement: the token does not discriminate.
                continue;
            }
            let complement: Vec<usize> = subset
                .iter()
                .copied()
                .filter(|i| !members.contains(i))
                .collect();
            let weighted = (members.len() as f64 * dataset_entropy(entities, members)
                + complement.len() as f64 * dataset_entropy(entities, &complement))
                / n;
            if best.is_none_or(|(_, e)| weighted < e) {
                best = Some((*token, weighted));
            }
        }

        let (token, weighted_entropy) = best?;
        let pos = positions[token];
        let members = candidates[pos].1.clone();
        let complement: Vec<usize> = subset
            .iter()
            .copied()
            .filter(|i| !members.contains(i))
            .collect();
        Some(Split {
            weighted_entropy,
            arg: SplitArg::Token(token.to_string()),
            partitions: vec![
                (BranchValue::Flag(true), members),
                (BranchValue::Flag(false), complement),
            ],
        })
    }

    /// Sort by numeric value and scan every boundary between adjacent
    /// distinct values for the entropy-minimizing threshold. Entities
    /// with no defined value are bucketed into a separate `un` branch
    /// and do not contribute to the score.
    fn split_quantitative(&self, entities: &[Entity], subset: &[usize]) -> Option<Split> {
        let mut defined: Vec<(usize, f64)> = Vec::new();
        let mut undefs: Vec<usize> = Vec::new();
        for &i in subset {
            match self.numeric(&entities[i]) {
                Some(v) => defined.push((i, v)),
                None => undefs.push(i),
            }
        }
        if defined.is_empty() {
            return None;
        }
        // Stable sort keeps the incoming entity order among equal values.
        defined.sort_by(|a, b| a.1.total_cmp(&b.1));

        let n = defined.len();
        let ordered: Vec<usize> = defined.iter().map(|&(i, _)| i).collect();
        let mut best: Option<(usize, f64)> = None;
        let mut prev = defined[0].1;
        for cut in 1..n {
            let value = defined[cut].1;
            if value == prev {
                continue;
            }
            prev = value;
            let (below, above) = ordered.split_at(cut);
            let weighted = (below.len() as f64 * dataset_entropy(entities, below)
                + above.len() as f64 * dataset_entropy(entities, above))
                / n as f64;
            if best.is_none_or(|(_, e)| weighted < e) {
                best = Some((cut, weighted));
            }
        }

        let (cut, weighted_entropy) = best?;
        let threshold = defined[cut].1;
        let (below, above) = ordered.split_at(cut);
        let mut partitions = vec![
            (BranchValue::Text(BELOW.to_string()), below.to_vec()),
            (BranchValue::Text(AT_OR_ABOVE.to_string()), above.to_vec()),
        ];
        if !undefs.is_empty() {
            partitions.push((BranchValue::Text(UNDEFINED.to_string()), undefs));
        }
        Some(Split {
            weighted_entropy,
            arg: SplitArg::Threshold(threshold),
            partitions,
        })
    }

    /// Re-derive the branch value for a single entity, using the same
    /// rule that produced the partition during training.
    ///
    /// An argument variant that does not match the feature (possible
    /// only through a hand-edited tree file) yields
    /// [`BranchValue::Absent`], which routes to the branch default.
    #[must_use]
    pub fn identify(&self, arg: &SplitArg, entity: &Entity) -> BranchValue {
        match self {
            Feature::Discrete { .. } | Feature::DiscreteIndexed { .. } => {
                match self.extract(entity) {
                    Some(v) => BranchValue::Text(v.to_string()),
                    None => BranchValue::Absent,
                }
            }
            Feature::Membership { .. } | Feature::MembershipIndexed { .. } => match arg {
                SplitArg::Token(token) => {
                    BranchValue::Flag(self.tokens(entity).iter().any(|t| t == token))
                }
                _ => BranchValue::Absent,
            },
            Feature::Quantitative { .. } => match arg {
                SplitArg::Threshold(threshold) => match self.numeric(entity) {
                    None => BranchValue::Text(UNDEFINED.to_string()),
                    Some(v) if v < *threshold => BranchValue::Text(BELOW.to_string()),
                    Some(_) => BranchValue::Text(AT_OR_ABOVE.to_string()),
                },
                _ => BranchValue::Absent,
            },
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// An insertion-ordered, read-only-after-setup collection of features.
///
/// Registration order matters: the builder tries features in this
/// order and breaks weighted-entropy ties in favor of the earlier
/// feature, so a fixed registration order makes induction fully
/// deterministic. Registering a feature whose name is already present
/// replaces it in place.
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    features: Vec<Feature>,
    by_name: HashMap<String, usize>,
}

impl FeatureRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a feature under its wire name.
    pub fn register(&mut self, feature: Feature) {
        match self.by_name.get(&feature.name()) {
            Some(&pos) => self.features[pos] = feature,
            None => {
                self.by_name.insert(feature.name(), self.features.len());
                self.features.push(feature);
            }
        }
    }

    /// Look up a feature by wire name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Feature> {
        self.by_name.get(name).map(|&pos| &self.features[pos])
    }

    /// Iterate features in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    /// Return the number of registered features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Return `true` when no features are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Label;

    fn entity(label: &str, attrs: &[(&str, &str)]) -> Entity {
        let mut e = Entity::new(Label::new(label));
        for (k, v) in attrs {
            e.set(*k, *v);
        }
        e
    }

    fn all(entities: &[Entity]) -> Vec<usize> {
        (0..entities.len()).collect()
    }

    // --- Names ---

    #[test]
    fn wire_names() {
        assert_eq!(Feature::Discrete { attr: "type".into() }.name(), "DF:type");
        assert_eq!(
            Feature::DiscreteIndexed { attr: "posTags".into(), index: 0 }.name(),
            "DF0:posTags"
        );
        assert_eq!(Feature::Membership { attr: "words".into() }.name(), "MF:words");
        assert_eq!(
            Feature::MembershipIndexed { attr: "words".into(), limit: 1 }.name(),
            "MF1:words"
        );
        assert_eq!(
            Feature::Quantitative { attr: "deltaLine".into() }.name(),
            "QF:deltaLine"
        );
    }

    // --- Discrete ---

    #[test]
    fn discrete_groups_by_exact_value() {
        let ents = vec![
            entity("a", &[("type", "Line")]),
            entity("a", &[("type", "Line")]),
            entity("b", &[("type", "Block")]),
        ];
        let feat = Feature::Discrete { attr: "type".into() };
        let split = feat.split(&ents, &all(&ents)).unwrap();
        assert_eq!(split.arg, SplitArg::None);
        assert_eq!(split.partitions.len(), 2);
        assert_eq!(split.partitions[0].0, BranchValue::Text("Line".into()));
        assert_eq!(split.partitions[0].1, vec![0, 1]);
        assert_eq!(split.partitions[1].0, BranchValue::Text("Block".into()));
        assert!((split.weighted_entropy - 0.0).abs() < 1e-10);
    }

    #[test]
    fn discrete_absent_forms_own_partition() {
        let ents = vec![
            entity("a", &[("type", "Line")]),
            entity("b", &[]),
        ];
        let feat = Feature::Discrete { attr: "type".into() };
        let split = feat.split(&ents, &all(&ents)).unwrap();
        assert_eq!(split.partitions[1].0, BranchValue::Absent);
    }

    #[test]
    fn discrete_single_value_is_invalid() {
        let ents = vec![
            entity("a", &[("type", "Line")]),
            entity("b", &[("type", "Line")]),
        ];
        let feat = Feature::Discrete { attr: "type".into() };
        assert!(feat.split(&ents, &all(&ents)).is_none());
    }

    #[test]
    fn split_refuses_singleton_subset() {
        let ents = vec![entity("a", &[("type", "Line")])];
        let feat = Feature::Discrete { attr: "type".into() };
        assert!(feat.split(&ents, &[0]).is_none());
    }

    #[test]
    fn discrete_indexed_takes_nth_token() {
        let ents = vec![
            entity("a", &[("parentTypes", "Stmt,Block")]),
            entity("b", &[("parentTypes", "Expr,Block")]),
        ];
        let feat = Feature::DiscreteIndexed { attr: "parentTypes".into(), index: 0 };
        let split = feat.split(&ents, &all(&ents)).unwrap();
        assert_eq!(split.partitions[0].0, BranchValue::Text("Stmt".into()));
        assert_eq!(split.partitions[1].0, BranchValue::Text("Expr".into()));
    }

    #[test]
    fn discrete_indexed_out_of_range_is_absent() {
        let feat = Feature::DiscreteIndexed { attr: "parentTypes".into(), index: 3 };
        let e = entity("a", &[("parentTypes", "Stmt,Block")]);
        assert_eq!(feat.extract(&e), None);
        assert_eq!(feat.identify(&SplitArg::None, &e), BranchValue::Absent);
    }

    // --- Membership ---

    #[test]
    fn membership_selects_perfectly_separating_token() {
        // Tokens: x separates the two 'a' entities from the 'b' one.
        let ents = vec![
            entity("a", &[("words", "x,y")]),
            entity("a", &[("words", "x,z")]),
            entity("b", &[("words", "z")]),
        ];
        let feat = Feature::Membership { attr: "words".into() };
        let split = feat.split(&ents, &all(&ents)).unwrap();
        assert_eq!(split.arg, SplitArg::Token("x".into()));
        assert!((split.weighted_entropy - 0.0).abs() < 1e-10);
        assert_eq!(split.partitions[0].0, BranchValue::Flag(true));
        assert_eq!(split.partitions[0].1, vec![0, 1]);
        assert_eq!(split.partitions[1].0, BranchValue::Flag(false));
        assert_eq!(split.partitions[1].1, vec![2]);
    }

    #[test]
    fn membership_skips_universal_token() {
        // "z" is in every entity; only "x" can split.
        let ents = vec![
            entity("a", &[("words", "z,x")]),
            entity("b", &[("words", "z")]),
        ];
        let feat = Feature::Membership { attr: "words".into() };
        let split = feat.split(&ents, &all(&ents)).unwrap();
        assert_eq!(split.arg, SplitArg::Token("x".into()));
    }

    #[test]
    fn membership_all_universal_is_invalid() {
        let ents = vec![
            entity("a", &[("words", "z")]),
            entity("b", &[("words", "z")]),
        ];
        let feat = Feature::Membership { attr: "words".into() };
        assert!(feat.split(&ents, &all(&ents)).is_none());
    }

    #[test]
    fn membership_absent_attribute_joins_complement() {
        let ents = vec![
            entity("a", &[("words", "x")]),
            entity("b", &[]),
        ];
        let feat = Feature::Membership { attr: "words".into() };
        let split = feat.split(&ents, &all(&ents)).unwrap();
        assert_eq!(split.partitions[1].1, vec![1]);
    }

    #[test]
    fn membership_indexed_sees_only_leading_tokens() {
        // "x" appears past the first token of entity 1, so with limit 1
        // it belongs only to entity 0.
        let ents = vec![
            entity("a", &[("words", "x,y")]),
            entity("b", &[("words", "y,x")]),
        ];
        let feat = Feature::MembershipIndexed { attr: "words".into(), limit: 1 };
        let split = feat.split(&ents, &all(&ents)).unwrap();
        // Either token separates perfectly; first-seen "x" wins the tie.
        assert_eq!(split.arg, SplitArg::Token("x".into()));
        assert_eq!(split.partitions[0].1, vec![0]);
    }

    #[test]
    fn membership_identify_tests_containment() {
        let feat = Feature::Membership { attr: "words".into() };
        let arg = SplitArg::Token("x".into());
        assert_eq!(
            feat.identify(&arg, &entity("a", &[("words", "y,x")])),
            BranchValue::Flag(true)
        );
        assert_eq!(
            feat.identify(&arg, &entity("a", &[("words", "y")])),
            BranchValue::Flag(false)
        );
        assert_eq!(feat.identify(&arg, &entity("a", &[])), BranchValue::Flag(false));
    }

    // --- Quantitative ---

    #[test]
    fn quantitative_finds_zero_entropy_threshold() {
        let ents = vec![
            entity("a", &[("value", "1")]),
            entity("a", &[("value", "2")]),
            entity("a", &[("value", "2")]),
            entity("b", &[("value", "5")]),
            entity("b", &[("value", "9")]),
        ];
        let feat = Feature::Quantitative { attr: "value".into() };
        let split = feat.split(&ents, &all(&ents)).unwrap();
        assert_eq!(split.arg, SplitArg::Threshold(5.0));
        assert!((split.weighted_entropy - 0.0).abs() < 1e-10);
        assert_eq!(split.partitions[0].0, BranchValue::Text("lt".into()));
        assert_eq!(split.partitions[0].1, vec![0, 1, 2]);
        assert_eq!(split.partitions[1].0, BranchValue::Text("ge".into()));
        assert_eq!(split.partitions[1].1, vec![3, 4]);
    }

    #[test]
    fn quantitative_buckets_undefined_separately() {
        let ents = vec![
            entity("a", &[("value", "1")]),
            entity("b", &[("value", "9")]),
            entity("c", &[]),
        ];
        let feat = Feature::Quantitative { attr: "value".into() };
        let split = feat.split(&ents, &all(&ents)).unwrap();
        assert_eq!(split.partitions.len(), 3);
        assert_eq!(split.partitions[2].0, BranchValue::Text("un".into()));
        assert_eq!(split.partitions[2].1, vec![2]);
        // The undefined bucket does not contribute to the score.
        assert!((split.weighted_entropy - 0.0).abs() < 1e-10);
    }

    #[test]
    fn quantitative_constant_values_invalid() {
        let ents = vec![
            entity("a", &[("value", "5")]),
            entity("b", &[("value", "5")]),
        ];
        let feat = Feature::Quantitative { attr: "value".into() };
        assert!(feat.split(&ents, &all(&ents)).is_none());
    }

    #[test]
    fn quantitative_all_undefined_invalid() {
        let ents = vec![entity("a", &[]), entity("b", &[])];
        let feat = Feature::Quantitative { attr: "value".into() };
        assert!(feat.split(&ents, &all(&ents)).is_none());
    }

    #[test]
    fn quantitative_unparseable_counts_as_undefined() {
        let ents = vec![
            entity("a", &[("value", "1")]),
            entity("b", &[("value", "9")]),
            entity("c", &[("value", "n/a")]),
        ];
        let feat = Feature::Quantitative { attr: "value".into() };
        let split = feat.split(&ents, &all(&ents)).unwrap();
        assert_eq!(split.partitions[2].0, BranchValue::Text("un".into()));
    }

    #[test]
    fn quantitative_identify_routes_around_threshold() {
        let feat = Feature::Quantitative { attr: "value".into() };
        let arg = SplitArg::Threshold(5.0);
        assert_eq!(
            feat.identify(&arg, &entity("a", &[("value", "4.9")])),
            BranchValue::Text("lt".into())
        );
        assert_eq!(
            feat.identify(&arg, &entity("a", &[("value", "5")])),
            BranchValue::Text("ge".into())
        );
        assert_eq!(
            feat.identify(&arg, &entity("a", &[])),
            BranchValue::Text("un".into())
        );
    }

    // --- Registry ---

    #[test]
    fn registry_preserves_registration_order() {
        let mut reg = FeatureRegistry::new();
        reg.register(Feature::Quantitative { attr: "b".into() });
        reg.register(Feature::Discrete { attr: "a".into() });
        let names: Vec<String> = reg.iter().map(Feature::name).collect();
        assert_eq!(names, vec!["QF:b", "DF:a"]);
    }

    #[test]
    fn registry_lookup_by_name() {
        let mut reg = FeatureRegistry::new();
        reg.register(Feature::Membership { attr: "words".into() });
        assert!(reg.get("MF:words").is_some());
        assert!(reg.get("MF:unknown").is_none());
    }

    #[test]
    fn registry_reregistration_replaces_in_place() {
        let mut reg = FeatureRegistry::new();
        reg.register(Feature::Discrete { attr: "a".into() });
        reg.register(Feature::Discrete { attr: "b".into() });
        reg.register(Feature::Discrete { attr: "a".into() });
        assert_eq!(reg.len(), 2);
        let names: Vec<String> = reg.iter().map(Feature::name).collect();
        assert_eq!(names, vec!["DF:a", "DF:b"]);
    }
}
