//! Writing generated files.

use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::error::CopilotError;

/// Write `content` to `path`, creating missing parent directories.
///
/// # Errors
/// Returns [`CopilotError::FileAccess`] if a directory or the file cannot be written.
pub fn save_file(content: &str, path: &Path) -> Result<(), CopilotError> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
    };

    write().map_err(|e| {
        error!("Error saving file {}: {}", path.display(), e);
        CopilotError::file_access(path, e)
    })?;

    info!("Saved file: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("models").join("staging").join("stg_orders.sql");
        save_file("select 1", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "select 1");
    }

    #[test]
    fn test_save_into_file_path_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("models");
        fs::write(&blocker, "not a directory").unwrap();
        let err = save_file("select 1", &blocker.join("stg_orders.sql")).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::FileAccess);
    }
}
