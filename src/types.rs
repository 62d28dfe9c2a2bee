use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One included file, ready to be written as a document section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSection {
    /// Path relative to the scan root.
    pub path: PathBuf,
    /// The full file content, decoded as UTF-8.
    pub content: String,
}

/// Why a file was left out of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The file could not be opened or read.
    Unreadable { message: String },
    /// The bytes look like binary data.
    Binary,
    /// Text-like content that is not valid UTF-8.
    InvalidEncoding { message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable { message } => write!(f, "{}", message),
            SkipReason::Binary => f.write_str("binary content"),
            SkipReason::InvalidEncoding { message } => write!(f, "not valid UTF-8: {}", message),
        }
    }
}

/// A file that survived the ignore rules but could not be emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Path relative to the scan root.
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// What a completed run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectSummary {
    /// The canonical scan root.
    pub root: PathBuf,
    /// The configured output document path.
    pub output: PathBuf,
    /// Whether the tree region was written.
    pub tree: bool,
    /// Relative paths of every emitted section, in document order.
    pub files: Vec<PathBuf>,
    /// Files that were skipped, with the reason.
    pub skipped: Vec<SkippedFile>,
}
