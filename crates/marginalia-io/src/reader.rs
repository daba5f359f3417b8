//! CSV comment-record reader with delta-attribute derivation.

use std::path::{Path, PathBuf};

use marginalia_tree::{Entity, Label};
use tracing::{debug, info, instrument};

use crate::IoError;

/// The positional deltas derived before records leave the loader.
///
/// Each entry is `(derived attribute, minuend, subtrahend)`: the
/// derived attribute is set only when both operands are present and
/// parse as integers.
const DELTA_ATTRS: [(&str, &str, &str); 4] = [
    ("deltaLine", "line", "prevLine"),
    ("deltaCols", "cols", "prevCols"),
    ("deltaLeft", "line", "leftLine"),
    ("deltaRight", "line", "rightLine"),
];

/// Reads labeled comment records from a CSV file.
///
/// Expected CSV format:
/// - Header row of attribute names, one of which is the designated
///   label column.
/// - One row per comment record. An empty cell means the attribute is
///   absent; a multi-valued attribute is a comma-delimited (quoted)
///   cell.
///
/// Positional delta attributes (`deltaLine`, `deltaCols`, `deltaLeft`,
/// `deltaRight`) are derived from the raw positional columns before
/// the entities are returned, so the tree core never computes derived
/// values itself.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::MissingLabelColumn`] | Label column absent from header |
/// | [`IoError::MissingLabel`] | Row with an empty label cell |
/// | [`IoError::EmptyDataset`] | Zero data rows after header |
pub struct EntityReader {
    path: PathBuf,
    label_attr: String,
}

impl EntityReader {
    /// Create a new reader for the given CSV path and label column.
    pub fn new(path: &Path, label_attr: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            label_attr: label_attr.into(),
        }
    }

    /// Read and validate the CSV file, returning fully-derived entities.
    #[instrument(skip(self), fields(path = %self.path.display(), label = %self.label_attr))]
    pub fn read(&self) -> Result<Vec<Entity>, IoError> {
        let file = std::fs::File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let header = rdr.headers().map_err(|e| self.csv_error(e))?.clone();
        let label_col = header
            .iter()
            .position(|name| name == self.label_attr)
            .ok_or_else(|| IoError::MissingLabelColumn {
                path: self.path.clone(),
                label: self.label_attr.clone(),
            })?;
        debug!(n_columns = header.len(), label_col, "read CSV header");

        let mut entities = Vec::new();
        for (row_index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| self.csv_error(e))?;

            let label = record.get(label_col).unwrap_or("");
            if label.is_empty() {
                return Err(IoError::MissingLabel {
                    path: self.path.clone(),
                    row_index,
                    label: self.label_attr.clone(),
                });
            }

            let mut entity = Entity::new(Label::new(label));
            for (attr, value) in header.iter().zip(record.iter()) {
                if attr != self.label_attr && !value.is_empty() {
                    entity.set(attr, value);
                }
            }
            derive_deltas(&mut entity);
            entities.push(entity);
        }

        if entities.is_empty() {
            return Err(IoError::EmptyDataset {
                path: self.path.clone(),
            });
        }

        info!(n_entities = entities.len(), "records loaded");
        Ok(entities)
    }

    fn csv_error(&self, e: csv::Error) -> IoError {
        IoError::CsvParse {
            path: self.path.clone(),
            offset: e.position().map_or(0, |p| p.byte()),
            source: e,
        }
    }
}

/// Compute positional delta attributes on one entity.
///
/// A delta is skipped when either operand is absent or not an integer.
fn derive_deltas(entity: &mut Entity) {
    for (derived, minuend, subtrahend) in DELTA_ATTRS {
        let Some(a) = entity.get(minuend).and_then(|v| v.parse::<i64>().ok()) else {
            continue;
        };
        let Some(b) = entity.get(subtrahend).and_then(|v| v.parse::<i64>().ok()) else {
            continue;
        };
        entity.set(derived, (a - b).to_string());
    }
}
