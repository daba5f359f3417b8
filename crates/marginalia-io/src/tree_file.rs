//! Persisted-tree file helpers.
//!
//! A tree file holds the nested JSON form produced by
//! [`marginalia_tree::export`], pretty-printed for inspection. Loading
//! only parses JSON here; grammar validation happens in
//! [`marginalia_tree::import`] against a feature registry.

use std::path::Path;

use serde_json::Value;
use tracing::{info, instrument};

use crate::IoError;

/// Write an exported tree to a pretty-printed JSON file.
///
/// # Errors
///
/// Returns [`IoError::WriteTree`] when the file cannot be written.
#[instrument(skip(tree), fields(path = %path.display()))]
pub fn save_tree(path: &Path, tree: &Value) -> Result<(), IoError> {
    // Value -> String cannot fail.
    let text = serde_json::to_string_pretty(tree).expect("JSON value is always serializable");
    std::fs::write(path, text.as_bytes()).map_err(|e| IoError::WriteTree {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(size_bytes = text.len(), "tree saved");
    Ok(())
}

/// Read a tree file back into its nested JSON form.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::ReadTree`] | file read failed |
/// | [`IoError::ParseTree`] | file is not valid JSON |
#[instrument(fields(path = %path.display()))]
pub fn load_tree(path: &Path) -> Result<Value, IoError> {
    let text = std::fs::read_to_string(path).map_err(|e| IoError::ReadTree {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| IoError::ParseTree {
        path: path.to_path_buf(),
        source: e,
    })
}
