//! Classification and precision/recall/F1 scoring.

use std::fmt;

use tracing::instrument;

use crate::entity::{Entity, Label};
use crate::error::TreeError;
use crate::node::TreeNode;

/// Classify one entity against an induced tree.
///
/// A leaf returns its label. A branch re-derives the entity's branch
/// value and descends into the matching child; a branch value unseen
/// during training falls back to the branch's stored default label.
/// Classification never fails.
#[must_use]
pub fn classify<'t>(tree: &'t TreeNode, entity: &Entity) -> &'t Label {
    match tree {
        TreeNode::Leaf { label } => label,
        TreeNode::Branch {
            feature,
            arg,
            default,
            ..
        } => {
            let value = feature.identify(arg, entity);
            match tree.child(&value) {
                Some(child) => classify(child, entity),
                None => default,
            }
        }
    }
}

/// Per-label precision, recall, and F1.
///
/// Degenerate-denominator policy: a label that was never predicted
/// reports `precision = 0.0`, a label with no actual occurrences
/// reports `recall = 0.0`, and `f1 = 0.0` whenever precision and
/// recall are both zero. No division by zero is ever performed.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LabelMetrics {
    /// The label being scored.
    pub label: Label,
    /// `correct / predicted`, or 0.0 when never predicted.
    pub precision: f64,
    /// `correct / actual`, or 0.0 when the label never occurs.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
    /// Entities correctly predicted as this label.
    pub correct: usize,
    /// Entities predicted as this label.
    pub predicted: usize,
    /// Entities actually carrying this label.
    pub actual: usize,
}

/// Scoring results over a labeled entity set.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Evaluation {
    /// Metrics per label, sorted by label for deterministic output.
    pub per_label: Vec<LabelMetrics>,
    /// Correct predictions over all entities.
    pub accuracy: f64,
    /// Total correct predictions.
    pub correct: usize,
    /// Number of entities scored.
    pub n_entities: usize,
}

/// Classify every entity and compute per-label metrics plus overall
/// accuracy.
///
/// Labels are collected from both the actual and the predicted side,
/// so a label the tree invents (or never emits) still gets a row.
///
/// # Errors
///
/// Returns [`TreeError::EmptyDataset`] when `entities` is empty.
#[instrument(skip_all, fields(n_entities = entities.len()))]
pub fn score_all(tree: &TreeNode, entities: &[Entity]) -> Result<Evaluation, TreeError> {
    if entities.is_empty() {
        return Err(TreeError::EmptyDataset);
    }

    // (label, correct, predicted, actual), insertion-ordered.
    let mut rows: Vec<(Label, usize, usize, usize)> = Vec::new();
    fn row(rows: &mut Vec<(Label, usize, usize, usize)>, label: &Label) -> usize {
        match rows.iter().position(|(l, ..)| l == label) {
            Some(pos) => pos,
            None => {
                rows.push((label.clone(), 0, 0, 0));
                rows.len() - 1
            }
        }
    }

    let mut correct_total = 0usize;
    for entity in entities {
        let predicted = classify(tree, entity).clone();
        let actual = entity.label();
        let i = row(&mut rows, actual);
        rows[i].3 += 1;
        let i = row(&mut rows, &predicted);
        rows[i].2 += 1;
        if &predicted == actual {
            let i = row(&mut rows, actual);
            rows[i].1 += 1;
            correct_total += 1;
        }
    }

    rows.sort_by(|a, b| a.0.cmp(&b.0));
    let per_label = rows
        .into_iter()
        .map(|(label, correct, predicted, actual)| {
            let precision = if predicted == 0 {
                0.0
            } else {
                correct as f64 / predicted as f64
            };
            let recall = if actual == 0 {
                0.0
            } else {
                correct as f64 / actual as f64
            };
            let f1 = if precision + recall == 0.0 {
                0.0
            } else {
                2.0 * precision * recall / (precision + recall)
            };
            LabelMetrics {
                label,
                precision,
                recall,
                f1,
                correct,
                predicted,
                actual,
            }
        })
        .collect();

    Ok(Evaluation {
        per_label,
        accuracy: correct_total as f64 / entities.len() as f64,
        correct: correct_total,
        n_entities: entities.len(),
    })
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.per_label {
            writeln!(
                f,
                "{}: prec={:.3}({}/{}), recl={:.3}({}/{}), F={:.3}",
                m.label, m.precision, m.correct, m.predicted, m.recall, m.correct, m.actual, m.f1
            )?;
        }
        write!(
            f,
            "{}/{} correct (accuracy={:.3})",
            self.correct, self.n_entities, self.accuracy
        )
    }
}
