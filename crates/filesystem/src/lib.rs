//! File system operations for doc-structure.
//!
//! This crate provides the primitives both layout checks are built from:
//! - `collect_files()` / `build_file_list()` - Glob-mask file collection
//! - `exclude_files_from_list()` - Exclusion pattern matching
//! - `validate_path_depth()` - Parent directory depth validation

pub mod collect;
pub mod depth;
pub mod error;
pub mod glob;

// Re-export main types
pub use collect::{build_file_list, collect_files, CollectOptions};
pub use depth::{parent_depth, validate_path_depth};
pub use error::FileSystemError;
pub use glob::exclude_files_from_list;
