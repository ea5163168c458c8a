use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use dirmap_core::mapper::{self, MapOptions};
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    let mut file = File::create(dir.join(name)).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

#[test]
fn written_report_carries_both_headings() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("project");
    fs::create_dir(&root).unwrap();
    write_file(&root, "main.rs", "fn main() {}");

    let output = tmp.path().join("report.md");
    let options = MapOptions {
        output_path: Some(output.clone()),
        ignore_patterns: Vec::new(),
    };
    mapper::generate_file_map(&root, &options).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("# Directory Structure for project"));
    assert!(written.contains("# File Contents"));
}

/// Reopening the report reproduces the same diagram and contents the call
/// returned in memory.
#[test]
fn report_round_trips_the_in_memory_result() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("project");
    fs::create_dir_all(root.join("src")).unwrap();
    write_file(&root, "README.md", "docs here");
    write_file(&root.join("src"), "lib.rs", "pub fn lib() {}");

    let output = tmp.path().join("out").join("report.md");
    fs::create_dir_all(output.parent().unwrap()).unwrap();
    let options = MapOptions {
        output_path: Some(output.clone()),
        ignore_patterns: Vec::new(),
    };
    let result = mapper::generate_file_map(&root, &options).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains(&result.file_map));
    assert!(written.contains(&result.file_contents));
}

#[test]
fn existing_report_is_overwritten() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("project");
    fs::create_dir(&root).unwrap();
    write_file(&root, "a.rs", "a");

    let output = tmp.path().join("report.md");
    fs::write(&output, "stale report from a previous run").unwrap();

    let options = MapOptions {
        output_path: Some(output.clone()),
        ignore_patterns: Vec::new(),
    };
    mapper::generate_file_map(&root, &options).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(!written.contains("stale report"));
    assert!(written.contains("# Directory Structure for project"));
}

#[test]
fn unwritable_output_path_propagates_io_error() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("project");
    fs::create_dir(&root).unwrap();
    write_file(&root, "a.rs", "a");

    // Parent of the output path does not exist.
    let options = MapOptions {
        output_path: Some(tmp.path().join("missing-dir").join("report.md")),
        ignore_patterns: Vec::new(),
    };

    assert!(mapper::generate_file_map(&root, &options).is_err());
}
