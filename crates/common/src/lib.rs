//! Shared types and utilities for doc-structure.
//!
//! This crate provides functionality used by every doc-structure crate:
//! - Layout constants (article depth, root marker)
//! - Path conversion helpers for reported paths
//! - Shared error types

pub mod constants;
pub mod error;
pub mod path_utils;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::PathError;
pub use path_utils::{is_hidden_name, relative_posix_path, to_posix_path, with_root_marker};
