//! Iterative depth-first walk producing the tree diagram, the concatenated
//! contents and the per-file token counts in a single pass.
//!
//! An explicit stack replaces recursion so arbitrarily deep trees cannot
//! overflow, and the accumulator is owned by one walk invocation from start
//! to finish.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use dirmap_common::error::MapError;

use crate::ignore::IgnoreMatcher;
use crate::tokens;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const LAST_INDENT: &str = "    ";

pub(crate) struct WalkOutput {
    pub tree: String,
    pub contents: String,
    pub file_tokens: BTreeMap<String, usize>,
}

/// One pending tree entry on the walk stack.
struct Entry {
    path: PathBuf,
    name: String,
    /// Forward-slash path relative to the walk root.
    rel: String,
    /// Accumulated indent of all ancestors, reflecting their last-ness.
    prefix: String,
    is_dir: bool,
    /// Last among the surviving siblings of its directory.
    last: bool,
}

/// Walks `root` depth-first. The caller has already verified that `root`
/// exists as a directory.
///
/// Symlinks are never followed as directories: the non-following
/// `DirEntry::file_type` classifies them as files, so a symlinked directory
/// contributes one diagram line and a read of its target, and cycles are
/// impossible. A broken link surfaces as an I/O error, like any other
/// unreadable file.
pub(crate) fn walk(root: &Path, matcher: &IgnoreMatcher) -> Result<WalkOutput, MapError> {
    let mut out = WalkOutput {
        tree: format!("{}\n", root_label(root)),
        contents: String::new(),
        file_tokens: BTreeMap::new(),
    };

    let mut stack: Vec<Entry> = Vec::new();
    push_children(root, "", "", matcher, &mut stack)?;

    while let Some(entry) = stack.pop() {
        let connector = if entry.last { LAST_BRANCH } else { BRANCH };
        out.tree.push_str(&entry.prefix);
        out.tree.push_str(connector);
        out.tree.push_str(&entry.name);
        out.tree.push('\n');

        if entry.is_dir {
            let indent = if entry.last { LAST_INDENT } else { PIPE_INDENT };
            let child_prefix = format!("{}{}", entry.prefix, indent);
            push_children(&entry.path, &entry.rel, &child_prefix, matcher, &mut stack)?;
        } else {
            append_file(&entry, &mut out)?;
        }
    }

    Ok(out)
}

/// Lists `dir`, drops ignored entries and pushes the survivors so the stack
/// pops them in sorted order.
///
/// Entries are sorted by basename byte order. Raw readdir order differs per
/// filesystem, and the diagram must come out identical for identical trees.
fn push_children(
    dir: &Path,
    rel: &str,
    prefix: &str,
    matcher: &IgnoreMatcher,
    stack: &mut Vec<Entry>,
) -> Result<(), MapError> {
    let mut listing: Vec<fs::DirEntry> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    listing.sort_by_key(|entry| entry.file_name());

    let mut survivors: Vec<Entry> = Vec::new();
    for dir_entry in listing {
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if matcher.matches(&name) {
            continue;
        }

        let is_dir = dir_entry.file_type()?.is_dir();
        let child_rel = if rel.is_empty() {
            name.clone()
        } else {
            format!("{rel}/{name}")
        };

        survivors.push(Entry {
            path: dir_entry.path(),
            name,
            rel: child_rel,
            prefix: prefix.to_string(),
            is_dir,
            last: false,
        });
    }

    if let Some(entry) = survivors.last_mut() {
        entry.last = true;
    }

    // Reversed so the first sibling is popped first.
    survivors.reverse();
    stack.extend(survivors);

    Ok(())
}

/// Reads one file, appends its contents block and records its token count.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; binary
/// files go through as (mangled) text, which is all the format promises.
fn append_file(entry: &Entry, out: &mut WalkOutput) -> Result<(), MapError> {
    let bytes = fs::read(&entry.path)?;
    let text = String::from_utf8_lossy(&bytes);

    out.contents.push_str("File: ");
    out.contents.push_str(&entry.rel);
    out.contents.push_str("\n```\n");
    out.contents.push_str(&text);
    if !text.ends_with('\n') {
        out.contents.push('\n');
    }
    out.contents.push_str("```\n\n");

    out.file_tokens
        .insert(entry.rel.clone(), tokens::estimate(&text));

    Ok(())
}

fn root_label(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
