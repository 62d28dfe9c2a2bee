//! # code-collector
//!
//! `code_collector` walks a project directory and consolidates it into a single markdown
//! document: a short header, an optional `tree`-style listing, and the content of every
//! file that is not ignored, each in its own fenced block.
//!
//! Paths are ignored when their basename is in an explicit name list, when the relative
//! path ends with an ignored suffix, or when the root's `.gitignore` matches them. A `.git`
//! directory at the root is ignored automatically.
//!
//! Files that cannot be read or are not valid UTF-8 are skipped with a `tracing` warning
//! and reported in the returned [`CollectSummary`]; they never abort the run.
//!
//! # Example
//!
//! ```no_run
//! use code_collector::{CollectorBuilder, collect};
//!
//! let options = CollectorBuilder::new("my-project")
//!     .output("my-project.md")
//!     .ignore_names(vec!["target".into()])
//!     .ignore_extensions(vec![".log".into()])
//!     .build();
//!
//! let summary = collect(options).expect("Failed to collect project");
//! println!("{} files written, {} skipped", summary.files.len(), summary.skipped.len());
//! ```

mod engine;
mod error;
mod ignore_rules;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{Collector, FileSections, collect};
pub use error::{CollectorError, Result};
pub use ignore_rules::{IgnoreRules, PATTERN_FILE, PatternMatcher, VCS_DIR};
pub use options::{CollectorBuilder, CollectorOptions};
pub use tree::render_tree;
pub use types::{CollectSummary, FileSection, SkipReason, SkippedFile};
