//! Error types for file system operations.

use doc_structure_common::PathError;
use thiserror::Error;

/// Errors that can occur while collecting and filtering files.
#[derive(Debug, Error)]
pub enum FileSystemError {
    /// IO error while walking the tree.
    #[error("IO error at {path}: {source}")]
    IoError {
        /// Path where the error occurred (empty if unknown).
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A glob pattern failed to compile.
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidGlobPattern {
        /// The offending pattern(s).
        pattern: String,
        /// Reason reported by the glob compiler.
        reason: String,
    },

    /// The scan root does not exist or is not a directory.
    #[error("Root directory not found: {path}")]
    RootNotFound {
        /// The root that was requested.
        path: String,
    },

    /// Path conversion failed.
    #[error(transparent)]
    Path(#[from] PathError),
}
