/// Names and name-globs excluded from every run unless the user opts out.
///
/// Matching is against basenames only, so `target` here hides any directory
/// called `target`, not just the one at the root.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git",
    "node_modules",
    "target",
    "dist",
    "build",
    "coverage",
    ".env",
    ".DS_Store",
    "*.log",
    "*.lock",
];

pub struct Config {
    /// Skips the version banner.
    pub no_banner: bool,

    /// Output verbosity: 0 = full summary, 1 = status lines only, 2+ = errors only.
    pub quiet: u8,
}
