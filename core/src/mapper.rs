//! # The Mapper
//!
//! The single orchestration entry point for a mapping run: check the root,
//! compile the ignore patterns, walk the tree, estimate token counts over
//! both artifacts and optionally persist the combined report.
//!
//! **Architectural Note:**
//! Callers should depend on [`generate_file_map`] rather than the concrete
//! submodules; the walk strategy and report format are implementation
//! details behind this function.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dirmap_common::error::MapError;

use crate::ignore::IgnoreMatcher;
use crate::report;
use crate::tokens;

mod walker;

/// Caller-supplied knobs for one mapping run.
#[derive(Default)]
pub struct MapOptions {
    /// Where to persist the combined Markdown report, if anywhere.
    pub output_path: Option<PathBuf>,

    /// Basenames and `*`-globs to exclude from the walk.
    pub ignore_patterns: Vec<String>,
}

/// Headline token figures for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCount {
    pub total: usize,
    pub file_map_tokens: usize,
    pub file_contents_tokens: usize,
}

/// Everything a mapping run produces. Immutable once built.
#[derive(Debug)]
pub struct MapResult {
    /// The indented, connector-decorated tree diagram.
    pub file_map: String,

    /// Every surviving file's literal text, each under a `File: <rel>`
    /// header inside its own fenced block.
    pub file_contents: String,

    /// Estimated token count per file, keyed by forward-slash relative path.
    /// The key set is exactly the set of surviving files.
    pub file_tokens: BTreeMap<String, usize>,

    pub token_count: TokenCount,
}

/// Executes a full mapping run against `root`.
///
/// Fails with [`MapError::DirectoryNotFound`] before any traversal when the
/// root does not exist as a directory; every other filesystem failure
/// surfaces as [`MapError::Io`] and aborts the run. There is no
/// partial-result mode.
pub fn generate_file_map(root: &Path, options: &MapOptions) -> Result<MapResult, MapError> {
    if !root.is_dir() {
        return Err(MapError::DirectoryNotFound(root.to_path_buf()));
    }

    let matcher = IgnoreMatcher::new(&options.ignore_patterns);
    let walk = walker::walk(root, &matcher)?;

    let file_map_tokens = tokens::estimate(&walk.tree);
    let file_contents_tokens = tokens::estimate(&walk.contents);

    let result = MapResult {
        file_map: walk.tree,
        file_contents: walk.contents,
        file_tokens: walk.file_tokens,
        token_count: TokenCount {
            total: file_map_tokens + file_contents_tokens,
            file_map_tokens,
            file_contents_tokens,
        },
    };

    if let Some(output_path) = &options.output_path {
        report::write_report(output_path, root, &result)?;
    }

    Ok(result)
}
