//! Error types shared by the model client and the file helpers.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Broad classification of a [`CopilotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The model endpoint could not produce a usable answer.
    Transport,
    /// A file could not be read, written or parsed.
    FileAccess,
}

/// Errors surfaced by the copilot's library code.
#[derive(Debug, Error)]
pub enum CopilotError {
    /// Endpoint unreachable, bad status, undecodable body or unknown model.
    #[error("model endpoint request failed for '{model}': {message}")]
    Transport { model: String, message: String },

    /// Missing, unreadable or unwritable file.
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File was read but its contents do not parse.
    #[error("cannot parse {} as {format}: {message}", path.display())]
    Malformed { path: PathBuf, format: &'static str, message: String },
}

impl CopilotError {
    /// Build a transport error from anything displayable.
    pub fn transport(model: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Transport { model: model.into(), message: err.to_string() }
    }

    pub fn file_access(path: &Path, source: std::io::Error) -> Self {
        Self::FileAccess { path: path.to_path_buf(), source }
    }

    pub fn malformed(path: &Path, format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Malformed { path: path.to_path_buf(), format, message: err.to_string() }
    }

    /// Classify the error; parse failures count as file access failures.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::FileAccess { .. } | Self::Malformed { .. } => ErrorKind::FileAccess,
        }
    }
}
