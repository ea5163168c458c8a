use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use dirmap_common::error::MapError;
use dirmap_core::mapper::{self, MapOptions, MapResult};
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    let mut file = File::create(dir.join(name)).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

fn map_with(root: &Path, patterns: &[&str]) -> MapResult {
    let options = MapOptions {
        output_path: None,
        ignore_patterns: patterns.iter().map(|p| p.to_string()).collect(),
    };
    mapper::generate_file_map(root, &options).expect("mapping failed")
}

/// A directory holding one `root.txt` must produce the exact diagram line
/// and contents block the format promises.
#[test]
fn single_file_tree() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "root.txt", "root content");

    let result = map_with(tmp.path(), &[]);

    assert!(result.file_map.contains("└── root.txt"));
    assert!(result.file_contents.contains("File: root.txt"));
    assert!(result.file_contents.contains("```\nroot content\n```"));
    assert_eq!(result.file_tokens.len(), 1);
}

#[test]
fn empty_directory_maps_to_bare_root_line() {
    let tmp = TempDir::new().unwrap();
    let root_name = tmp.path().file_name().unwrap().to_string_lossy().into_owned();

    let result = map_with(tmp.path(), &[]);

    assert_eq!(result.file_map, format!("{root_name}\n"));
    assert_eq!(result.file_contents, "");
    assert!(result.file_tokens.is_empty());
    assert_eq!(result.token_count.file_contents_tokens, 0);
}

/// With no ignore patterns, every entry appears exactly once in the diagram
/// and every file's literal content appears verbatim.
#[test]
fn full_tree_is_reproduced() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("project");
    fs::create_dir_all(root.join("src")).unwrap();
    write_file(&root, "README.md", "a readme");
    write_file(&root.join("src"), "main.rs", "fn main() { println!(\"hi\"); }");

    let result = map_with(&root, &[]);

    for name in ["README.md", "src", "main.rs"] {
        assert_eq!(
            result.file_map.matches(name).count(),
            1,
            "{name} should appear exactly once in the diagram"
        );
    }
    assert!(result.file_contents.contains("a readme"));
    assert!(result.file_contents.contains("fn main() { println!(\"hi\"); }"));
}

#[test]
fn ignored_entries_vanish_from_both_outputs() {
    let tmp = TempDir::new().unwrap();
    let modules = tmp.path().join("node_modules");
    fs::create_dir(&modules).unwrap();
    write_file(&modules, "lib.js", "module.exports = 1;");
    write_file(tmp.path(), ".env", "SECRET=hunter2");
    write_file(tmp.path(), "notes.txt", "plain notes");
    write_file(tmp.path(), "todo.txt", "more notes");
    write_file(tmp.path(), "kept.rs", "fn kept() {}");

    let result = map_with(tmp.path(), &["node_modules", ".env", "*.txt"]);

    for needle in ["node_modules", ".env", "notes.txt", "todo.txt", "SECRET", "plain notes"] {
        assert!(!result.file_map.contains(needle), "diagram leaked {needle}");
        assert!(
            !result.file_contents.contains(needle),
            "contents leaked {needle}"
        );
    }
    assert_eq!(result.file_tokens.len(), 1);
    assert!(result.file_tokens.contains_key("kept.rs"));
}

/// Key set of the per-file map == the surviving files, keyed with forward
/// slashes relative to the root.
#[test]
fn file_tokens_keys_match_surviving_files() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    write_file(tmp.path(), "top.rs", "top");
    write_file(&nested, "deep.rs", "deep");

    let result = map_with(tmp.path(), &[]);
    let keys: Vec<&str> = result.file_tokens.keys().map(|key| key.as_str()).collect();

    assert_eq!(keys, vec!["a/b/deep.rs", "top.rs"]);
}

#[test]
fn token_totals_add_up() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "one.rs", "fn one() {}");
    write_file(tmp.path(), "two.rs", "fn two() {}");

    let result = map_with(tmp.path(), &[]);
    let counts = result.token_count;

    assert_eq!(counts.total, counts.file_map_tokens + counts.file_contents_tokens);
    assert!(counts.file_map_tokens > 0);
    assert!(counts.file_contents_tokens > 0);
}

#[test]
fn missing_root_reports_directory_not_found() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist");

    let err = mapper::generate_file_map(&missing, &MapOptions::default())
        .expect_err("mapping a missing directory must fail");

    assert!(matches!(err, MapError::DirectoryNotFound(_)));
    assert!(err.to_string().contains("Directory not found"));
    assert!(err.to_string().contains("does-not-exist"));
}

#[test]
fn root_path_as_file_is_rejected() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "plain.txt", "not a directory");

    let err = mapper::generate_file_map(&tmp.path().join("plain.txt"), &MapOptions::default())
        .expect_err("a file root must fail");

    assert!(matches!(err, MapError::DirectoryNotFound(_)));
}
