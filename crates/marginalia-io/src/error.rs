//! I/O error types for marginalia-io.

use std::path::PathBuf;

/// Errors from record loading and tree-file persistence.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist or is unreadable.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the CSV parser encounters a malformed record.
    #[error("CSV parse error in {path} at byte offset {offset}")]
    CsvParse {
        /// Path to the CSV file.
        path: PathBuf,
        /// Byte offset where the error occurred.
        offset: u64,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Returned when the CSV file contains a header but zero data rows.
    #[error("empty dataset (no data rows) in {path}")]
    EmptyDataset {
        /// Path to the CSV file.
        path: PathBuf,
    },

    /// Returned when the designated label column is missing from the header.
    #[error("label column \"{label}\" not found in header of {path}")]
    MissingLabelColumn {
        /// Path to the CSV file.
        path: PathBuf,
        /// The requested label column name.
        label: String,
    },

    /// Returned when a row has an empty label cell.
    #[error("row {row_index} of {path} has no value in label column \"{label}\"")]
    MissingLabel {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index (excluding header).
        row_index: usize,
        /// The label column name.
        label: String,
    },

    /// Returned when a tree file cannot be read.
    #[error("failed to read tree from {path}")]
    ReadTree {
        /// Path to the tree file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a tree file is not valid JSON.
    #[error("failed to parse tree JSON from {path}")]
    ParseTree {
        /// Path to the tree file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Returned when a tree file cannot be written.
    #[error("failed to write tree to {path}")]
    WriteTree {
        /// Path to the tree file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
