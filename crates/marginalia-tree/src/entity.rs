//! The entity model: attribute-tagged, labeled comment records.

use std::collections::HashMap;
use std::fmt;

/// A classification label (category key) attached to an entity.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
    serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Create a new label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Return the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A labeled record mapping attribute names to raw string values.
///
/// Attribute values are opaque at this layer: a value may be a single
/// token, a comma-delimited multi-value list, or numeric text. How a
/// value is interpreted is decided by the [`Feature`](crate::Feature)
/// reading it. An absent attribute is simply not present in the map.
///
/// Entities are treated as immutable once training starts; derived
/// attributes (positional deltas and the like) are computed by the
/// loader before entities reach the tree builder.
#[derive(Debug, Clone)]
pub struct Entity {
    attrs: HashMap<String, String>,
    label: Label,
}

impl Entity {
    /// Create a new entity with the given label and no attributes.
    pub fn new(label: Label) -> Self {
        Self {
            attrs: HashMap::new(),
            label,
        }
    }

    /// Set an attribute value, replacing any previous value.
    pub fn set(&mut self, attr: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(attr.into(), value.into());
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, attr: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(attr, value);
        self
    }

    /// Return the raw value of an attribute, or `None` when absent.
    #[must_use]
    pub fn get(&self, attr: &str) -> Option<&str> {
        self.attrs.get(attr).map(String::as_str)
    }

    /// Return the entity's classification label.
    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_as_str_returns_inner() {
        let label = Label::new("noise");
        assert_eq!(label.as_str(), "noise");
    }

    #[test]
    fn label_display() {
        let label = Label::new("explain");
        assert_eq!(format!("{label}"), "explain");
    }

    #[test]
    fn get_present_attribute() {
        let e = Entity::new(Label::new("a")).with("type", "LineComment");
        assert_eq!(e.get("type"), Some("LineComment"));
    }

    #[test]
    fn get_absent_attribute() {
        let e = Entity::new(Label::new("a"));
        assert_eq!(e.get("type"), None);
    }

    #[test]
    fn set_replaces_value() {
        let mut e = Entity::new(Label::new("a")).with("line", "10");
        e.set("line", "12");
        assert_eq!(e.get("line"), Some("12"));
    }
}
