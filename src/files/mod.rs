//! File helpers for reading inputs and saving generated output.

mod reader;
mod writer;

use std::path::Path;

pub use reader::{parse_python_file, parse_schema_file, parse_sql_file};
pub use writer::save_file;

/// Lower-cased extension without the dot, empty when there is none.
pub fn file_extension(path: &Path) -> String {
    path.extension().map(|ext| ext.to_string_lossy().to_lowercase()).unwrap_or_default()
}

/// Whether `path` exists.
pub fn validate_file_exists(path: &Path) -> bool {
    path.exists()
}
