/// Errors from tree induction, import, and evaluation.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Returned when an operation requiring entities receives none.
    #[error("dataset has zero entities")]
    EmptyDataset,

    /// Returned when a serialized tree names a feature missing from the registry.
    #[error("serialized tree references unknown feature \"{name}\"")]
    UnknownFeature {
        /// The unresolved feature name.
        name: String,
    },

    /// Returned when serialized tree data does not match the Branch/Leaf grammar.
    #[error("malformed tree data: {reason}")]
    MalformedTree {
        /// Human-readable description of the shape violation.
        reason: String,
    },
}
