//! Language-neutral tree persistence.
//!
//! A tree is exported as plain nested JSON: a branch is the 4-element
//! array `[featureName, splitArg, defaultLabel, children]` with
//! `children` a list of `[branchValue, child]` pairs, and a leaf is a
//! bare label string. Shape is the sole discriminant on import, and
//! the importer is strict: anything outside this grammar is rejected
//! rather than coerced.

use serde_json::{Value, json};
use tracing::instrument;

use crate::entity::Label;
use crate::error::TreeError;
use crate::feature::{BranchValue, Feature, FeatureRegistry, SplitArg};
use crate::node::TreeNode;

/// Export a tree to its nested JSON form.
#[must_use]
pub fn export(node: &TreeNode) -> Value {
    match node {
        TreeNode::Leaf { label } => Value::String(label.as_str().to_string()),
        TreeNode::Branch {
            feature,
            arg,
            default,
            children,
        } => {
            let arg = match arg {
                SplitArg::None => Value::Null,
                SplitArg::Token(token) => Value::String(token.clone()),
                SplitArg::Threshold(threshold) => json!(threshold),
            };
            let children: Vec<Value> = children
                .iter()
                .map(|(value, child)| {
                    let value = match value {
                        BranchValue::Text(s) => Value::String(s.clone()),
                        BranchValue::Flag(b) => Value::Bool(*b),
                        BranchValue::Absent => Value::Null,
                    };
                    json!([value, export(child)])
                })
                .collect();
            json!([feature.name(), arg, default.as_str(), children])
        }
    }
}

/// Import a tree from its nested JSON form.
///
/// Feature names are resolved against `registry`; the split argument
/// of every branch must match the named feature's variant (no
/// argument for discrete, a token string for membership, a numeric
/// threshold for quantitative).
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`TreeError::UnknownFeature`] | a feature name is not registered |
/// | [`TreeError::MalformedTree`] | wrong arity, unexpected nesting, or a scalar of the wrong type |
#[instrument(skip_all)]
pub fn import(registry: &FeatureRegistry, data: &Value) -> Result<TreeNode, TreeError> {
    match data {
        Value::String(label) => Ok(TreeNode::Leaf {
            label: Label::new(label.clone()),
        }),
        Value::Array(items) => import_branch(registry, items),
        other => Err(malformed(format!(
            "node must be a string leaf or 4-element branch array, got {}",
            type_name(other)
        ))),
    }
}

fn import_branch(registry: &FeatureRegistry, items: &[Value]) -> Result<TreeNode, TreeError> {
    let [name, arg, default, children] = items else {
        return Err(malformed(format!(
            "branch array must have 4 elements, got {}",
            items.len()
        )));
    };

    let Value::String(name) = name else {
        return Err(malformed("feature name must be a string".to_string()));
    };
    let feature = registry
        .get(name)
        .ok_or_else(|| TreeError::UnknownFeature { name: name.clone() })?;

    let arg = parse_arg(feature, arg)?;

    let Value::String(default) = default else {
        return Err(malformed("default label must be a string".to_string()));
    };

    let Value::Array(children) = children else {
        return Err(malformed("children must be a list of pairs".to_string()));
    };
    let children = children
        .iter()
        .map(|pair| {
            let Value::Array(pair) = pair else {
                return Err(malformed("child entry must be a [value, node] pair".to_string()));
            };
            let [value, child] = pair.as_slice() else {
                return Err(malformed(format!(
                    "child entry must have 2 elements, got {}",
                    pair.len()
                )));
            };
            let value = match value {
                Value::String(s) => BranchValue::Text(s.clone()),
                Value::Bool(b) => BranchValue::Flag(*b),
                Value::Null => BranchValue::Absent,
                other => {
                    return Err(malformed(format!(
                        "branch value must be a string, bool, or null, got {}",
                        type_name(other)
                    )));
                }
            };
            Ok((value, import(registry, child)?))
        })
        .collect::<Result<Vec<_>, TreeError>>()?;

    Ok(TreeNode::Branch {
        feature: feature.clone(),
        arg,
        default: Label::new(default.clone()),
        children,
    })
}

/// Validate the split argument against the feature's variant.
fn parse_arg(feature: &Feature, arg: &Value) -> Result<SplitArg, TreeError> {
    match feature {
        Feature::Discrete { .. } | Feature::DiscreteIndexed { .. } => match arg {
            Value::Null => Ok(SplitArg::None),
            other => Err(malformed(format!(
                "feature {} takes no split argument, got {}",
                feature.name(),
                type_name(other)
            ))),
        },
        Feature::Membership { .. } | Feature::MembershipIndexed { .. } => match arg {
            Value::String(token) => Ok(SplitArg::Token(token.clone())),
            other => Err(malformed(format!(
                "feature {} needs a token argument, got {}",
                feature.name(),
                type_name(other)
            ))),
        },
        Feature::Quantitative { .. } => match arg {
            Value::Number(n) => n.as_f64().map(SplitArg::Threshold).ok_or_else(|| {
                malformed(format!("feature {} threshold is not finite", feature.name()))
            }),
            other => Err(malformed(format!(
                "feature {} needs a numeric threshold, got {}",
                feature.name(),
                type_name(other)
            ))),
        },
    }
}

fn malformed(reason: impl Into<String>) -> TreeError {
    TreeError::MalformedTree {
        reason: reason.into(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
