use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Per-file failures are reported as [`crate::SkippedFile`] values instead.
#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid target directory {path}: {reason}")]
    InvalidRoot { path: PathBuf, reason: String },
    #[error("Ignore pattern error: {0}")]
    Pattern(String),
}

impl CollectorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CollectorError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_root(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        CollectorError::InvalidRoot {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CollectorError>;
