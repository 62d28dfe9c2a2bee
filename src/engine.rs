use crate::error::{CollectorError, Result};
use crate::ignore_rules::{IgnoreRules, VCS_DIR, relative_to};
use crate::options::CollectorOptions;
use crate::output;
use crate::tree::render_tree;
use crate::types::{CollectSummary, FileSection, SkipReason, SkippedFile};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Streams the file sections under a scan root, one file read at a time.
///
/// Ignored directories are pruned and never descended into, symbolic links are not
/// followed, and entries are visited in file-name order. Each item is either a
/// decoded section or a record of why a file could not be emitted.
pub struct FileSections {
    root: PathBuf,
    walk: ignore::Walk,
    exclude: Option<PathBuf>,
}

impl FileSections {
    pub fn new(root: &Path, rules: &IgnoreRules) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        let filter_root = root.to_path_buf();
        let filter_rules = rules.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let relative = relative_to(&filter_root, entry.path());
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            !filter_rules.should_ignore(&relative, is_dir)
        });
        Self {
            root: root.to_path_buf(),
            walk: builder.build(),
            exclude: None,
        }
    }

    /// Never emit the file at `path` (an absolute path under the root).
    pub fn exclude(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude = Some(path.into());
        self
    }
}

impl Iterator for FileSections {
    type Item = std::result::Result<FileSection, SkippedFile>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error under {}: {}", self.root.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            if self.exclude.as_deref() == Some(entry.path()) {
                tracing::debug!("Not emitting the output document {}", entry.path().display());
                continue;
            }
            let path = relative_to(&self.root, entry.path());
            return Some(match read_file_content(entry.path()) {
                Ok(content) => Ok(FileSection { path, content }),
                Err(reason) => Err(SkippedFile { path, reason }),
            });
        }
    }
}

fn read_file_content(path: &Path) -> std::result::Result<String, SkipReason> {
    let bytes = fs::read(path).map_err(|e| SkipReason::Unreadable {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| {
        if content_inspector::inspect(e.as_bytes()).is_binary() {
            SkipReason::Binary
        } else {
            SkipReason::InvalidEncoding {
                message: e.utf8_error().to_string(),
            }
        }
    })
}

/// A validated scan root with its ignore rules, ready to produce a document.
#[derive(Debug, Clone)]
pub struct Collector {
    root: PathBuf,
    output: PathBuf,
    rules: IgnoreRules,
    include_tree: bool,
}

impl Collector {
    /// Validates the target directory and assembles the ignore rules.
    ///
    /// # Errors
    ///
    /// - [`CollectorError::InvalidRoot`] if the root is missing or not a directory.
    /// - [`CollectorError::Io`] if the root's `.gitignore` exists but cannot be read.
    /// - [`CollectorError::Pattern`] if the patterns cannot be compiled.
    pub fn new(options: &CollectorOptions) -> Result<Self> {
        let metadata = fs::metadata(&options.root)
            .map_err(|e| CollectorError::invalid_root(&options.root, e.to_string()))?;
        if !metadata.is_dir() {
            return Err(CollectorError::invalid_root(&options.root, "not a directory"));
        }
        let root = fs::canonicalize(&options.root).map_err(|e| CollectorError::io(&options.root, e))?;

        let mut rules = IgnoreRules::for_root(
            &root,
            options.respect_gitignore,
            &options.patterns,
            options.ignore_names.iter().cloned(),
            options.ignore_extensions.iter().cloned(),
        )?;
        if options.detect_vcs_dir && root.join(VCS_DIR).is_dir() {
            tracing::debug!("Found {} at {}, ignoring it", VCS_DIR, root.display());
            rules.add_name(VCS_DIR);
        }

        Ok(Self {
            root,
            output: options.output.clone(),
            rules,
            include_tree: options.include_tree,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn rules(&self) -> &IgnoreRules {
        &self.rules
    }

    /// The name shown in the document header: the root's last component.
    pub fn target_name(&self) -> String {
        match self.root.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.root.display().to_string(),
        }
    }

    pub fn tree_lines(&self) -> Vec<String> {
        render_tree(&self.root, &self.rules)
    }

    pub fn sections(&self) -> FileSections {
        FileSections::new(&self.root, &self.rules)
    }

    /// Writes the whole document to `out`.
    ///
    /// Files that cannot be read or decoded are logged, left out of the document,
    /// and listed in the returned summary. If the configured output file already
    /// exists under the root, it is never emitted as a section.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError::Io`] if writing to `out` fails.
    pub fn write_document<W: Write>(&self, out: &mut W) -> Result<CollectSummary> {
        let write_err = |e: io::Error| CollectorError::io(&self.output, e);

        output::write_header(out, &self.target_name()).map_err(write_err)?;
        if self.include_tree {
            output::write_tree(out, &self.tree_lines()).map_err(write_err)?;
        }

        let mut sections = self.sections();
        if let Ok(output_path) = fs::canonicalize(&self.output) {
            sections = sections.exclude(output_path);
        }

        let mut files = Vec::new();
        let mut skipped = Vec::new();
        for item in sections {
            match item {
                Ok(section) => {
                    output::write_section(out, &section).map_err(write_err)?;
                    files.push(section.path);
                }
                Err(skip) => {
                    tracing::warn!("Skipping file {}, reason: {}", skip.path.display(), skip.reason);
                    skipped.push(skip);
                }
            }
        }
        tracing::debug!("Wrote {} sections, skipped {} files", files.len(), skipped.len());

        Ok(CollectSummary {
            root: self.root.clone(),
            output: self.output.clone(),
            tree: self.include_tree,
            files,
            skipped,
        })
    }
}

/// Consolidates `options.root` into the document at `options.output`.
///
/// # Errors
///
/// Fails on an invalid root, an unreadable pattern file, or if the output
/// cannot be created or written. Per-file read failures are not errors.
pub fn collect(options: CollectorOptions) -> Result<CollectSummary> {
    tracing::debug!(
        "Collecting {} into {}",
        options.root.display(),
        options.output.display()
    );
    let collector = Collector::new(&options)?;
    let file = File::create(&options.output).map_err(|e| CollectorError::io(&options.output, e))?;
    let mut writer = BufWriter::new(file);
    let summary = collector.write_document(&mut writer)?;
    writer
        .flush()
        .map_err(|e| CollectorError::io(&options.output, e))?;
    Ok(summary)
}
