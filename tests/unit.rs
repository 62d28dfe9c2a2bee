use code_collector::{IgnoreRules, PatternMatcher, render_tree};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn rules(names: &[&str], extensions: &[&str]) -> IgnoreRules {
    IgnoreRules::new(
        None,
        names.iter().map(|s| s.to_string()),
        extensions.iter().map(|s| s.to_string()),
    )
}

#[test]
fn test_name_set_ignores_at_any_depth() {
    let rules = rules(&["node_modules"], &[]);
    assert!(rules.should_ignore(Path::new("node_modules"), true));
    assert!(rules.should_ignore(Path::new("web/node_modules"), true));
    assert!(!rules.should_ignore(Path::new("web/node_modules.txt"), false));
}

#[test]
fn test_extension_is_path_suffix() {
    let rules = rules(&[], &[".log"]);
    assert!(rules.should_ignore(Path::new("b.log"), false));
    assert!(rules.should_ignore(Path::new("deep/er/trace.log"), false));
    assert!(!rules.should_ignore(Path::new("log.txt"), false));
}

#[test]
fn test_empty_extension_is_dropped() {
    let rules = rules(&[], &[""]);
    assert!(rules.extensions().is_empty());
    assert!(!rules.should_ignore(Path::new("a.txt"), false));
}

#[test]
fn test_name_and_extension_win_over_negation() {
    let dir = tempdir().unwrap();
    let matcher = PatternMatcher::from_lines(dir.path(), None, ["!*"]).unwrap();
    let rules = IgnoreRules::new(
        Some(matcher),
        vec!["secret.txt".to_string()],
        vec![".bak".to_string()],
    );
    assert!(rules.should_ignore(Path::new("secret.txt"), false));
    assert!(rules.should_ignore(Path::new("src/old.bak"), false));
    assert!(!rules.should_ignore(Path::new("src/main.rs"), false));
}

#[test]
fn test_should_ignore_is_deterministic() {
    let dir = tempdir().unwrap();
    let matcher = PatternMatcher::from_lines(dir.path(), None, ["*.tmp"]).unwrap();
    let rules = IgnoreRules::new(Some(matcher), Vec::<String>::new(), vec![".log".to_string()]);
    for path in ["a.tmp", "a.log", "a.rs", "x/y.tmp"] {
        let first = rules.should_ignore(Path::new(path), false);
        for _ in 0..5 {
            assert_eq!(rules.should_ignore(Path::new(path), false), first);
        }
    }
}

#[test]
fn test_gitignore_semantics() {
    let dir = tempdir().unwrap();
    let matcher = PatternMatcher::from_lines(
        dir.path(),
        None,
        ["# build output", "", "build/", "*.tmp", "!keep.tmp", "/root_only.txt", "docs/**/*.html"],
    )
    .unwrap();
    assert!(matcher.matches(Path::new("build"), true));
    assert!(!matcher.matches(Path::new("build"), false));
    assert!(matcher.matches(Path::new("build/out.txt"), false));
    assert!(matcher.matches(Path::new("a/b.tmp"), false));
    assert!(!matcher.matches(Path::new("keep.tmp"), false));
    assert!(matcher.matches(Path::new("root_only.txt"), false));
    assert!(!matcher.matches(Path::new("sub/root_only.txt"), false));
    assert!(matcher.matches(Path::new("docs/api/v1/index.html"), false));
    assert!(!matcher.matches(Path::new("src/main.rs"), false));
}

#[test]
fn test_invalid_pattern_line_is_skipped() {
    let dir = tempdir().unwrap();
    let matcher = PatternMatcher::from_lines(dir.path(), None, ["[", "*.tmp"]).unwrap();
    assert!(matcher.matches(Path::new("a.tmp"), false));
    assert!(!matcher.matches(Path::new("a.rs"), false));
}

#[test]
fn test_load_missing_pattern_file() {
    let dir = tempdir().unwrap();
    let loaded = PatternMatcher::load(dir.path(), &dir.path().join(".gitignore"), &[]).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_load_pattern_file_with_extra_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".gitignore");
    fs::write(&path, "*.log\n").unwrap();
    let matcher = PatternMatcher::load(dir.path(), &path, &["dist/".to_string()])
        .unwrap()
        .unwrap();
    assert_eq!(matcher.len(), 2);
    assert!(matcher.matches(Path::new("a.log"), false));
    assert!(matcher.matches(Path::new("dist"), true));
}

#[test]
fn test_load_undecodable_pattern_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".gitignore");
    fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();
    assert!(PatternMatcher::load(dir.path(), &path, &[]).is_err());
}

#[test]
fn test_tree_sorted_with_connectors() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("z.md"), "").unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "").unwrap();
    fs::write(dir.path().join("src/lib.rs"), "").unwrap();
    fs::create_dir_all(dir.path().join("zz/inner")).unwrap();
    fs::write(dir.path().join("zz/inner/c.txt"), "").unwrap();

    let lines = render_tree(dir.path(), &IgnoreRules::default());
    assert_eq!(
        lines,
        vec![
            "├── a.txt",
            "├── src",
            "│   ├── lib.rs",
            "│   └── main.rs",
            "├── z.md",
            "└── zz",
            "    └── inner",
            "        └── c.txt",
        ]
    );
}

#[test]
fn test_tree_empty_subdirectory() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let lines = render_tree(dir.path(), &IgnoreRules::default());
    assert_eq!(lines, vec!["└── sub"]);
}

#[test]
fn test_tree_omits_ignored_entries() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();
    fs::write(dir.path().join("b.log"), "").unwrap();
    fs::create_dir(dir.path().join("target")).unwrap();
    fs::write(dir.path().join("target/out.txt"), "").unwrap();

    let lines = render_tree(dir.path(), &rules(&["target"], &[".log"]));
    assert_eq!(lines, vec!["└── a.txt"]);
}

#[test]
fn test_tree_of_missing_directory_is_empty() {
    let dir = tempdir().unwrap();
    let lines = render_tree(&dir.path().join("missing"), &IgnoreRules::default());
    assert!(lines.is_empty());
}
