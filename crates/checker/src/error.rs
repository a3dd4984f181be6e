//! Error types for layout checks.

use doc_structure_filesystem::FileSystemError;
use thiserror::Error;

/// Errors that stop a check run before it can produce an outcome.
///
/// Misplaced files are findings, not errors; they end up in a `CheckReport`.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Collecting or filtering files failed.
    #[error("{check} check failed: {source}")]
    FileSystem {
        /// Which check was running.
        check: &'static str,
        /// Underlying error.
        #[source]
        source: FileSystemError,
    },
}

impl CheckError {
    /// Wrap a file system error raised while running `check`.
    ///
    /// # Arguments
    /// * `check` - Name of the running check
    /// * `source` - The underlying error
    pub fn file_system(check: &'static str, source: FileSystemError) -> Self {
        Self::FileSystem { check, source }
    }
}
