//! Shannon-entropy metrics over label distributions.

use crate::entity::{Entity, Label};

/// Compute the Shannon entropy of a distribution of positive counts.
///
/// For `n = Σ counts`, the result is `Σ c·log2(n/c) / n`. A single
/// count (or any distribution where one count equals `n`) yields 0.
///
/// # Panics
///
/// Panics when `counts` is empty: entropy of nothing is a caller bug,
/// not a recoverable condition.
#[must_use]
pub fn entropy(counts: &[usize]) -> f64 {
    assert!(!counts.is_empty(), "entropy of an empty distribution");
    debug_assert!(counts.iter().all(|&c| c > 0), "counts must be positive");
    let n = counts.iter().sum::<usize>() as f64;
    counts
        .iter()
        .map(|&c| {
            let c = c as f64;
            c * (n / c).log2()
        })
        .sum::<f64>()
        / n
}

/// Count labels over the entities selected by `subset`.
///
/// Returns `(label, count)` pairs in first-seen order, which keeps
/// downstream tie-breaking deterministic for a fixed entity order.
#[must_use]
pub fn label_counts(entities: &[Entity], subset: &[usize]) -> Vec<(Label, usize)> {
    let mut counts: Vec<(Label, usize)> = Vec::new();
    for &i in subset {
        let label = entities[i].label();
        match counts.iter_mut().find(|(l, _)| l == label) {
            Some((_, c)) => *c += 1,
            None => counts.push((label.clone(), 1)),
        }
    }
    counts
}

/// Entropy of the label distribution over the entities selected by `subset`.
///
/// # Panics
///
/// Panics when `subset` is empty (see [`entropy`]).
#[must_use]
pub fn dataset_entropy(entities: &[Entity], subset: &[usize]) -> f64 {
    let counts: Vec<usize> = label_counts(entities, subset)
        .iter()
        .map(|&(_, c)| c)
        .collect();
    entropy(&counts)
}

/// Return the label with the maximum count.
///
/// Ties keep the earliest entry, so for counts produced by
/// [`label_counts`] the winner is the first-seen label among the tied
/// ones.
///
/// # Panics
///
/// Panics when `counts` is empty.
#[must_use]
pub fn majority_label(counts: &[(Label, usize)]) -> &Label {
    let mut best: Option<(&Label, usize)> = None;
    for (label, count) in counts {
        if best.is_none_or(|(_, c)| c < *count) {
            best = Some((label, *count));
        }
    }
    let (label, _) = best.expect("majority label of an empty distribution");
    label
}
