//! Path conversion utilities for reported paths.
//!
//! Every path the checker reports is POSIX-style and starts with the root
//! marker, e.g. `./src/Cat/Sec/article.md`. Exclusion patterns and depth
//! checks operate on that form.

use std::path::{Component, Path};

use crate::constants::{PATH_SEPARATOR, ROOT_MARKER};
use crate::error::PathError;

/// Convert a path to POSIX-style string (forward slashes).
///
/// `.` components are dropped; all other components are kept as-is.
///
/// # Arguments
/// * `path` - Path to convert
///
/// # Returns
/// String with forward slashes as separators.
pub fn to_posix_path(path: &Path) -> String {
    path.components()
        .filter(|c: &Component| !matches!(c, Component::CurDir))
        .map(|c: Component| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Express `path` relative to `root` in POSIX form.
///
/// Purely lexical: `path` is expected to have been produced by walking
/// `root`, so no canonicalization is done.
///
/// # Arguments
/// * `path` - Path found under the root
/// * `root` - Scan root directory
///
/// # Errors
/// Returns `PathOutsideRoot` if `path` does not start with `root`, and
/// `InvalidPath` if the remainder is empty.
pub fn relative_posix_path(path: &Path, root: &Path) -> Result<String, PathError> {
    let relative: &Path = path
        .strip_prefix(root)
        .map_err(|_| PathError::PathOutsideRoot {
            path: path.display().to_string(),
            root: root.display().to_string(),
        })?;

    let posix: String = to_posix_path(relative);
    if posix.is_empty() {
        return Err(PathError::InvalidPath {
            path: path.display().to_string(),
        });
    }
    Ok(posix)
}

/// Prefix a root-relative POSIX path with the root marker (`./`).
///
/// # Arguments
/// * `relative` - POSIX path relative to the scan root
pub fn with_root_marker(relative: &str) -> String {
    let trimmed: &str = relative.trim_start_matches(PATH_SEPARATOR);
    format!("{ROOT_MARKER}{PATH_SEPARATOR}{trimmed}")
}

/// Check whether a file name is hidden in the shell-glob sense.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_to_posix_path() {
        let path: PathBuf = PathBuf::from("a/b/c");
        assert_eq!(to_posix_path(&path), "a/b/c");
    }

    #[test]
    fn test_to_posix_path_drops_cur_dir() {
        let path: PathBuf = PathBuf::from("./src/./Cat");
        assert_eq!(to_posix_path(&path), "src/Cat");
    }

    #[test]
    fn test_relative_posix_path() {
        let result: String =
            relative_posix_path(Path::new("/docs/src/Cat/a.md"), Path::new("/docs")).unwrap();
        assert_eq!(result, "src/Cat/a.md");
    }

    #[test]
    fn test_relative_posix_path_dot_root() {
        let result: String =
            relative_posix_path(Path::new("./src/Cat/a.md"), Path::new(".")).unwrap();
        assert_eq!(result, "src/Cat/a.md");
    }

    #[test]
    fn test_relative_posix_path_outside_root() {
        let result: Result<String, PathError> =
            relative_posix_path(Path::new("/etc/passwd"), Path::new("/docs"));
        assert!(matches!(result, Err(PathError::PathOutsideRoot { .. })));
    }

    #[test]
    fn test_relative_posix_path_root_itself() {
        let result: Result<String, PathError> =
            relative_posix_path(Path::new("/docs"), Path::new("/docs"));
        assert!(matches!(result, Err(PathError::InvalidPath { .. })));
    }

    #[test]
    fn test_with_root_marker() {
        assert_eq!(with_root_marker("src/Cat/a.md"), "./src/Cat/a.md");
        assert_eq!(with_root_marker("README.md"), "./README.md");
    }

    #[test]
    fn test_is_hidden_name() {
        assert!(is_hidden_name(".git"));
        assert!(is_hidden_name(".DS_Store"));
        assert!(!is_hidden_name("README.md"));
    }
}
