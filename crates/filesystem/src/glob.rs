//! Exclusion pattern matching.
//!
//! Patterns follow shell `fnmatch` semantics on the reported path string:
//! - `*` matches any sequence of characters, including `/`
//! - `?` matches any single character
//! - `[abc]`, `[a-z]` and `[!abc]` character classes
//! - Matching is case-sensitive
//!
//! Because `*` crosses directory separators, `./src/*/*/assets/*` excludes
//! everything below any `assets` directory at least two levels under `src`.
//!
//! ```
//! use doc_structure_filesystem::glob::exclude_files_from_list;
//!
//! let files = vec![
//!     "./src/Cat/Sec/assets/image.png".to_string(),
//!     "./src/Cat/Sec/image.png".to_string(),
//! ];
//! let kept = exclude_files_from_list(&files, &["./src/*/*/assets/*".to_string()]).unwrap();
//!
//! assert_eq!(kept, vec!["./src/Cat/Sec/image.png".to_string()]);
//! ```

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::FileSystemError;

/// Remove every path matching any exclusion pattern.
///
/// Order of the remaining paths is preserved. A path matching several
/// patterns is dropped once; duplicates that match nothing are all kept.
///
/// # Arguments
/// * `files` - Candidate paths
/// * `exclude_list` - Exclusion glob patterns
///
/// # Errors
/// Returns error if any pattern is invalid.
pub fn exclude_files_from_list(
    files: &[String],
    exclude_list: &[String],
) -> Result<Vec<String>, FileSystemError> {
    let excluded: GlobSet = build_set(exclude_list)?;
    let kept: Vec<String> = files
        .iter()
        .filter(|path: &&String| !excluded.is_match(path.as_str()))
        .cloned()
        .collect();

    log::debug!(
        "Exclusion filter kept {} of {} paths ({} patterns)",
        kept.len(),
        files.len(),
        exclude_list.len()
    );
    Ok(kept)
}

/// Compile patterns into one set. An empty list matches nothing.
fn build_set(patterns: &[String]) -> Result<GlobSet, FileSystemError> {
    let mut builder: GlobSetBuilder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob: Glob = Glob::new(pattern).map_err(|e| FileSystemError::InvalidGlobPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| FileSystemError::InvalidGlobPattern {
            pattern: patterns.join(", "),
            reason: e.to_string(),
        })
}
