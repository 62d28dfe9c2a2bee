//! Ignore rules: compiled `.gitignore` patterns plus literal name and suffix filters.

use crate::error::{CollectorError, Result};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the pattern file looked up at the scan root.
pub const PATTERN_FILE: &str = ".gitignore";
/// Version-control metadata directory excluded automatically when present at the scan root.
pub const VCS_DIR: &str = ".git";

/// Compiled gitignore-style patterns, matched against paths relative to the scan root.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    inner: Gitignore,
}

impl PatternMatcher {
    /// Loads and compiles the pattern file at `path`, followed by `extra` pattern lines.
    ///
    /// Returns `Ok(None)` when the file does not exist and there are no extra lines.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError::Io`] if the file exists but cannot be read as UTF-8 text.
    pub fn load(root: &Path, path: &Path, extra: &[String]) -> Result<Option<Self>> {
        let text = if path.is_file() {
            Some(fs::read_to_string(path).map_err(|e| CollectorError::io(path, e))?)
        } else {
            tracing::debug!("No pattern file at {}", path.display());
            None
        };
        if text.is_none() && extra.is_empty() {
            return Ok(None);
        }
        let mut builder = GitignoreBuilder::new(root);
        if let Some(text) = &text {
            add_lines(&mut builder, Some(path), text.lines());
        }
        add_lines(&mut builder, None, extra.iter().map(String::as_str));
        compile(builder).map(Some)
    }

    /// Compiles pattern lines with gitignore semantics.
    ///
    /// Lines that are not valid globs are logged and skipped, the way git skips them.
    pub fn from_lines<'a>(
        root: &Path,
        source: Option<&Path>,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        let mut builder = GitignoreBuilder::new(root);
        add_lines(&mut builder, source, lines);
        compile(builder)
    }

    /// True when `relative_path`, or one of its parent directories, is ignored.
    pub fn matches(&self, relative_path: &Path, is_dir: bool) -> bool {
        self.inner
            .matched_path_or_any_parents(relative_path, is_dir)
            .is_ignore()
    }

    /// Number of compiled patterns, negations included.
    pub fn len(&self) -> usize {
        self.inner.num_ignores() as usize + self.inner.num_whitelists() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn compile(builder: GitignoreBuilder) -> Result<PatternMatcher> {
    let inner = builder
        .build()
        .map_err(|e| CollectorError::Pattern(e.to_string()))?;
    Ok(PatternMatcher { inner })
}

fn add_lines<'a>(
    builder: &mut GitignoreBuilder,
    source: Option<&Path>,
    lines: impl IntoIterator<Item = &'a str>,
) {
    for line in lines {
        if let Err(e) = builder.add_line(source.map(Path::to_path_buf), line) {
            tracing::warn!("Skipping invalid ignore pattern {:?}: {}", line, e);
        }
    }
}

/// The combined rule set deciding which paths are excluded from the tree and the file sections.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    matcher: Option<PatternMatcher>,
    names: BTreeSet<String>,
    extensions: BTreeSet<String>,
}

impl IgnoreRules {
    pub fn new(
        matcher: Option<PatternMatcher>,
        names: impl IntoIterator<Item = String>,
        extensions: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            matcher,
            names: names.into_iter().collect(),
            // an empty suffix would match every path
            extensions: extensions.into_iter().filter(|e| !e.is_empty()).collect(),
        }
    }

    /// Builds the rules for `root`: the root's `.gitignore` (when `respect_gitignore`),
    /// followed by `extra_patterns`, plus the literal names and suffixes.
    ///
    /// # Errors
    ///
    /// Fails if the pattern file exists but cannot be read, or the patterns cannot be compiled.
    pub fn for_root(
        root: &Path,
        respect_gitignore: bool,
        extra_patterns: &[String],
        names: impl IntoIterator<Item = String>,
        extensions: impl IntoIterator<Item = String>,
    ) -> Result<Self> {
        let matcher = if respect_gitignore {
            PatternMatcher::load(root, &root.join(PATTERN_FILE), extra_patterns)?
        } else if extra_patterns.is_empty() {
            None
        } else {
            Some(PatternMatcher::from_lines(
                root,
                None,
                extra_patterns.iter().map(String::as_str),
            )?)
        };
        Ok(Self::new(matcher, names, extensions))
    }

    pub fn add_name(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn matcher(&self) -> Option<&PatternMatcher> {
        self.matcher.as_ref()
    }

    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }

    pub fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }

    /// Decides whether `relative_path` is excluded from all output.
    ///
    /// A path is ignored iff its basename is an ignored name, its full relative path ends
    /// with an ignored suffix, or the pattern matcher matches it.
    pub fn should_ignore(&self, relative_path: &Path, is_dir: bool) -> bool {
        if let Some(name) = relative_path.file_name()
            && self.names.contains(&*name.to_string_lossy())
        {
            return true;
        }
        let path_str = relative_path.to_string_lossy();
        if self.extensions.iter().any(|ext| path_str.ends_with(ext.as_str())) {
            return true;
        }
        match &self.matcher {
            Some(matcher) => matcher.matches(relative_path, is_dir),
            None => false,
        }
    }
}

/// Path of `path` relative to `root`, or `path` itself if it is not under `root`.
pub(crate) fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
