//! Persists a mapping run as a single Markdown document.

use std::fs;
use std::path::Path;

use dirmap_common::error::MapError;

use crate::mapper::MapResult;

/// Writes the combined report to `path`, replacing whatever was there.
///
/// Document order: a heading naming the root, the raw diagram in a fenced
/// block, a `# File Contents` heading, then the contents block (which
/// carries its own per-file fences). Unwritable paths propagate as I/O
/// errors.
pub fn write_report(path: &Path, root: &Path, result: &MapResult) -> Result<(), MapError> {
    fs::write(path, compose(root, result))?;
    Ok(())
}

fn compose(root: &Path, result: &MapResult) -> String {
    let root_name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());

    let mut doc = String::new();
    doc.push_str(&format!("# Directory Structure for {root_name}\n\n"));
    doc.push_str("```\n");
    doc.push_str(&result.file_map);
    doc.push_str("```\n\n");
    doc.push_str("# File Contents\n\n");
    doc.push_str(&result.file_contents);
    doc
}
