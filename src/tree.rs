//! Renders the directory tree listing shown at the top of the document.

use crate::ignore_rules::IgnoreRules;
use std::fs;
use std::path::Path;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Renders the non-ignored contents of `root` as `tree`-style lines.
///
/// Entries are sorted by name at every level. The scan root itself gets no line.
/// Directories that cannot be listed contribute no lines, and symbolic links are
/// never followed, so a link to a directory is drawn as a leaf.
pub fn render_tree(root: &Path, rules: &IgnoreRules) -> Vec<String> {
    render_level(root, rules, Path::new(""), "")
}

fn render_level(root: &Path, rules: &IgnoreRules, relative: &Path, prefix: &str) -> Vec<String> {
    let dir = root.join(relative);
    let read_dir = match fs::read_dir(&dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            tracing::debug!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut entries: Vec<_> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            (entry.file_name(), is_dir)
        })
        .filter(|(name, is_dir)| !rules.should_ignore(&relative.join(name), *is_dir))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut lines = Vec::new();
    let count = entries.len();
    for (index, (name, is_dir)) in entries.into_iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{}{}{}", prefix, connector, name.to_string_lossy()));
        if is_dir {
            let extension = if is_last { SPACE } else { PIPE };
            let child_prefix = format!("{}{}", prefix, extension);
            lines.extend(render_level(root, rules, &relative.join(&name), &child_prefix));
        }
    }
    lines
}
