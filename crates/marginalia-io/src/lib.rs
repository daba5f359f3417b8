//! Comment-record loading and tree-file persistence for marginalia.

mod error;
mod reader;
mod tree_file;

pub use error::IoError;
pub use reader::EntityReader;
pub use tree_file::{load_tree, save_tree};
