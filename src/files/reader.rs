//! Reading and parsing of input files.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use sqlformat::{FormatOptions, QueryParams};
use tracing::{debug, error, warn};

use super::{file_extension, validate_file_exists};
use crate::error::CopilotError;

/// Read a UTF-8 text file.
///
/// # Errors
/// Returns [`CopilotError::FileAccess`] if the file is missing or unreadable.
pub fn read_file(path: &Path) -> Result<String, CopilotError> {
    if !validate_file_exists(path) {
        error!("Error reading file {}: file not found", path.display());
        return Err(CopilotError::file_access(path, io::Error::new(io::ErrorKind::NotFound, "file not found")));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        error!("Error reading file {}: {}", path.display(), e);
        CopilotError::file_access(path, e)
    })?;

    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Read a SQL file and reformat it with upper-cased keywords.
pub fn parse_sql_file(path: &Path) -> Result<String, CopilotError> {
    let content = read_file(path)?;
    Ok(format_sql(&content))
}

/// Reindent SQL and upper-case its keywords.
pub fn format_sql(sql: &str) -> String {
    let options = FormatOptions { uppercase: Some(true), ..Default::default() };
    sqlformat::format(sql, &QueryParams::None, &options)
}

/// Parse a YAML file into a JSON value.
pub fn parse_yaml_file(path: &Path) -> Result<Value, CopilotError> {
    let content = read_file(path)?;
    serde_yaml::from_str(&content).map_err(|e| {
        error!("Error parsing YAML file {}: {}", path.display(), e);
        CopilotError::malformed(path, "YAML", e)
    })
}

/// Parse a JSON file.
pub fn parse_json_file(path: &Path) -> Result<Value, CopilotError> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| {
        error!("Error parsing JSON file {}: {}", path.display(), e);
        CopilotError::malformed(path, "JSON", e)
    })
}

/// Parse a schema file, choosing YAML for `.yml`/`.yaml` and JSON otherwise.
pub fn parse_schema_file(path: &Path) -> Result<Value, CopilotError> {
    match file_extension(path).as_str() {
        "yml" | "yaml" => parse_yaml_file(path),
        _ => parse_json_file(path),
    }
}

/// Read an Airflow DAG source file, warning when it is not a `.py` file.
pub fn parse_python_file(path: &Path) -> Result<String, CopilotError> {
    let content = read_file(path)?;

    if file_extension(path) != "py" {
        warn!("File {} doesn't have .py extension", path.display());
    }

    Ok(content)
}
