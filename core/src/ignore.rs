//! # Ignore Patterns
//!
//! Decides which directory entries a mapping run skips.
//!
//! A pattern is either:
//! * An exact basename (e.g., `node_modules`, `.env`), compared case-sensitively.
//! * A `*`-glob (e.g., `*.txt`), where `*` matches any run of characters
//!   (including none) and every other character is literal.
//!
//! Patterns match basenames only, never full paths. `*` is the single
//! wildcard on purpose; richer glob syntax would change what `*.txt` means
//! and is deliberately out.

use std::path::Path;

use regex::Regex;

/// A compiled ignore-pattern list, built once per mapping run.
pub struct IgnoreMatcher {
    exact: Vec<String>,
    globs: Vec<Regex>,
}

impl IgnoreMatcher {
    pub fn new(patterns: &[String]) -> Self {
        let mut exact = Vec::new();
        let mut globs = Vec::new();

        for pattern in patterns {
            if pattern.contains('*') {
                if let Some(matcher) = glob_to_regex(pattern) {
                    globs.push(matcher);
                }
            } else {
                exact.push(pattern.clone());
            }
        }

        Self { exact, globs }
    }

    /// True if any pattern matches the given basename.
    pub fn matches(&self, basename: &str) -> bool {
        self.exact.iter().any(|pattern| pattern == basename)
            || self.globs.iter().any(|matcher| matcher.is_match(basename))
    }

    /// Convenience wrapper that extracts the basename from a path first.
    ///
    /// A path with no basename (e.g., `/`) is never ignored.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.matches(&name.to_string_lossy()))
            .unwrap_or(false)
    }
}

/// Translates a `*`-glob into an anchored regex over the whole basename.
///
/// Literal chunks go through [`regex::escape`], so `.` and every other
/// metacharacter match themselves. Returns `None` if the compiled pattern is
/// somehow rejected; a pathological pattern then simply never matches instead
/// of aborting the walk.
fn glob_to_regex(pattern: &str) -> Option<Regex> {
    let translated: String = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<String>>()
        .join(".*");

    Regex::new(&format!("^{translated}$")).ok()
}
