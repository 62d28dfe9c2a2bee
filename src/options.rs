use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub include_tree: bool,
    pub respect_gitignore: bool,
    pub detect_vcs_dir: bool,
    pub ignore_names: Vec<String>,
    pub ignore_extensions: Vec<String>,
    pub patterns: Vec<String>,
}

impl Default for CollectorOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("collected.md"),
            include_tree: true,
            respect_gitignore: true,
            detect_vcs_dir: true,
            ignore_names: Vec::new(),
            ignore_extensions: Vec::new(),
            patterns: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CollectorBuilder {
    options: CollectorOptions,
}

impl CollectorBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: CollectorOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn include_tree(mut self, yes: bool) -> Self {
        self.options.include_tree = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn detect_vcs_dir(mut self, yes: bool) -> Self {
        self.options.detect_vcs_dir = yes;
        self
    }
    pub fn ignore_names(mut self, names: Vec<String>) -> Self {
        self.options.ignore_names = names;
        self
    }
    pub fn ignore_extensions(mut self, extensions: Vec<String>) -> Self {
        self.options.ignore_extensions = extensions;
        self
    }
    pub fn patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.patterns = patterns;
        self
    }
    pub fn build(self) -> CollectorOptions {
        self.options
    }
}
