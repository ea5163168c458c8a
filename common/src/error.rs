use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of a mapping run.
///
/// Either a complete, consistent result comes back or one of these does;
/// there is no partial-success mode.
#[derive(Debug, Error)]
pub enum MapError {
    /// The root path did not exist as a directory when the run started.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Any filesystem error hit while listing, statting or reading.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
