//! File collection by glob mask.
//!
//! The mask is matched against each file's path relative to the scan root
//! with shell-glob rules: `*`, `?` and `[...]` stay within one path
//! component, and a `**` component spans any number of directories
//! (including none). Matched files are reported with the root marker, e.g.
//! `./src/Cat/Sec/article.md`.

use std::path::{Path, PathBuf};

use doc_structure_common::{is_hidden_name, relative_posix_path, with_root_marker};
use globset::{GlobBuilder, GlobMatcher};
use walkdir::{DirEntry, WalkDir};

use crate::error::FileSystemError;
use crate::glob::exclude_files_from_list;

/// Options for collecting files under a root directory.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Root directory to scan.
    pub root: PathBuf,
    /// Glob mask files must match, relative to the root.
    pub mask: String,
    /// Descend into subdirectories (false = direct children only).
    pub recursive: bool,
    /// Also visit entries whose name starts with `.`.
    pub include_hidden: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            mask: "**/*.*".to_string(),
            recursive: false,
            include_hidden: false,
        }
    }
}

impl CollectOptions {
    /// Create options for a root and mask, non-recursive.
    ///
    /// # Arguments
    /// * `root` - Directory to scan
    /// * `mask` - Glob mask relative to the root
    pub fn new(root: impl Into<PathBuf>, mask: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            mask: mask.into(),
            ..Default::default()
        }
    }

    /// Set whether subdirectories are scanned.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set whether hidden entries are visited.
    pub fn with_include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }
}

/// Collect all regular files under the root matching the mask.
///
/// Entries are visited in file-name order, so the result is stable across
/// runs on an unchanged tree. A symbolic link is reported like a file unless
/// it points to a directory; linked directories are never descended into.
///
/// # Arguments
/// * `options` - Collection configuration
///
/// # Returns
/// Matching paths with the root marker, possibly empty.
///
/// # Errors
/// Returns error if the root is missing, the mask is invalid, or a
/// directory cannot be read.
pub fn collect_files(options: &CollectOptions) -> Result<Vec<String>, FileSystemError> {
    let root: &Path = &options.root;
    if !root.is_dir() {
        return Err(FileSystemError::RootNotFound {
            path: root.display().to_string(),
        });
    }

    let matcher: GlobMatcher = compile_mask(&options.mask)?;
    let max_depth: usize = if options.recursive { usize::MAX } else { 1 };
    let include_hidden: bool = options.include_hidden;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry: &DirEntry| {
            // Never filter the root itself, even when it is `.`
            entry.depth() == 0 || include_hidden || !is_hidden_entry(entry)
        });

    let mut files: Vec<String> = Vec::new();
    for entry in walker {
        let entry: DirEntry = entry.map_err(|e| FileSystemError::IoError {
            path: e
                .path()
                .map(|p: &Path| p.display().to_string())
                .unwrap_or_default(),
            source: e.into(),
        })?;

        if !is_file_like(&entry) {
            continue;
        }

        let relative_path: String = relative_posix_path(entry.path(), root)?;
        if matcher.is_match(&relative_path) {
            files.push(with_root_marker(&relative_path));
        }
    }

    log::debug!(
        "Collected {} files matching '{}' under {}",
        files.len(),
        options.mask,
        root.display()
    );
    Ok(files)
}

/// Collect files by mask, then drop those matching any exclusion pattern.
///
/// # Arguments
/// * `options` - Collection configuration
/// * `exclude_list` - Exclusion glob patterns applied to reported paths
///
/// # Errors
/// Returns error if collection fails or an exclusion pattern is invalid.
pub fn build_file_list(
    options: &CollectOptions,
    exclude_list: &[String],
) -> Result<Vec<String>, FileSystemError> {
    let files: Vec<String> = collect_files(options)?;
    exclude_files_from_list(&files, exclude_list)
}

/// Compile a collection mask; wildcards do not cross `/`.
fn compile_mask(mask: &str) -> Result<GlobMatcher, FileSystemError> {
    GlobBuilder::new(mask)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| FileSystemError::InvalidGlobPattern {
            pattern: mask.to_string(),
            reason: e.to_string(),
        })
}

/// Regular files, and symlinks whose target is not a directory (dangling
/// links included, as shell globbing lists them).
fn is_file_like(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        return !entry.path().is_dir();
    }
    entry.file_type().is_file()
}

fn is_hidden_entry(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(is_hidden_name)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path: PathBuf = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"content").unwrap();
    }

    fn create_docs_tree(root: &Path) {
        touch(root, "README.md");
        touch(root, "LICENSE.txt");
        touch(root, "src/Cat/Sec/article.md");
        touch(root, "src/Cat/Sec/OTHER.MD");
        touch(root, "src/Cat/Sec/assets/image.png");
        touch(root, "src/Cat/loose.md");
        touch(root, ".git/HEAD.md");
    }

    #[test]
    fn test_collect_recursive_markdown() {
        let dir: TempDir = TempDir::new().unwrap();
        create_docs_tree(dir.path());

        let options: CollectOptions =
            CollectOptions::new(dir.path(), "**/*.[mM][dD]").with_recursive(true);
        let files: Vec<String> = collect_files(&options).unwrap();

        assert_eq!(
            files,
            vec![
                "./README.md".to_string(),
                "./src/Cat/Sec/OTHER.MD".to_string(),
                "./src/Cat/Sec/article.md".to_string(),
                "./src/Cat/loose.md".to_string(),
            ]
        );
    }

    #[test]
    fn test_collect_non_recursive() {
        let dir: TempDir = TempDir::new().unwrap();
        create_docs_tree(dir.path());

        let options: CollectOptions = CollectOptions::new(dir.path(), "**/*.[mM][dD]");
        let files: Vec<String> = collect_files(&options).unwrap();

        assert_eq!(files, vec!["./README.md".to_string()]);
    }

    #[test]
    fn test_collect_includes_hidden_when_asked() {
        let dir: TempDir = TempDir::new().unwrap();
        create_docs_tree(dir.path());

        let options: CollectOptions = CollectOptions::new(dir.path(), "**/*.md")
            .with_recursive(true)
            .with_include_hidden(true);
        let files: Vec<String> = collect_files(&options).unwrap();

        assert!(files.contains(&"./.git/HEAD.md".to_string()));
    }

    #[test]
    fn test_mask_wildcards_stay_in_component() {
        let dir: TempDir = TempDir::new().unwrap();
        create_docs_tree(dir.path());

        let options: CollectOptions =
            CollectOptions::new(dir.path(), "src/*.md").with_recursive(true);
        let files: Vec<String> = collect_files(&options).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_directories_are_not_reported() {
        let dir: TempDir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/notes.md")).unwrap();

        let options: CollectOptions =
            CollectOptions::new(dir.path(), "**/*.md").with_recursive(true);
        let files: Vec<String> = collect_files(&options).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_empty_root_yields_nothing() {
        let dir: TempDir = TempDir::new().unwrap();
        let options: CollectOptions =
            CollectOptions::new(dir.path(), "**/*.*").with_recursive(true);
        assert!(collect_files(&options).unwrap().is_empty());
    }

    #[test]
    fn test_missing_root() {
        let dir: TempDir = TempDir::new().unwrap();
        let options: CollectOptions = CollectOptions::new(dir.path().join("missing"), "**/*");
        assert!(matches!(
            collect_files(&options),
            Err(FileSystemError::RootNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_mask() {
        let dir: TempDir = TempDir::new().unwrap();
        let options: CollectOptions = CollectOptions::new(dir.path(), "[invalid");
        assert!(matches!(
            collect_files(&options),
            Err(FileSystemError::InvalidGlobPattern { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_are_reported() {
        let dir: TempDir = TempDir::new().unwrap();
        touch(dir.path(), "src/Cat/Sec/assets/real.png");
        let sec: PathBuf = dir.path().join("src/Cat/Sec");
        std::os::unix::fs::symlink(sec.join("assets/real.png"), sec.join("stray.png")).unwrap();
        std::os::unix::fs::symlink(sec.join("missing.png"), sec.join("dangling.png")).unwrap();
        std::os::unix::fs::symlink(sec.join("assets"), sec.join("linked_dir.png")).unwrap();

        let options: CollectOptions =
            CollectOptions::new(dir.path(), "**/*.png").with_recursive(true);
        let files: Vec<String> = collect_files(&options).unwrap();

        assert_eq!(
            files,
            vec![
                "./src/Cat/Sec/assets/real.png".to_string(),
                "./src/Cat/Sec/dangling.png".to_string(),
                "./src/Cat/Sec/stray.png".to_string(),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir: TempDir = TempDir::new().unwrap();
        touch(dir.path(), "src/Cat/Sec/article.md");
        let locked: PathBuf = dir.path().join("src/Cat");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still read the directory
        let readable: bool = fs::read_dir(&locked).is_ok();
        let options: CollectOptions =
            CollectOptions::new(dir.path(), "**/*.md").with_recursive(true);
        let result: Result<Vec<String>, FileSystemError> = collect_files(&options);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if readable {
            return;
        }
        match result {
            Err(FileSystemError::IoError { path, .. }) => assert!(path.ends_with("src/Cat")),
            other => panic!("expected IoError, got {other:?}"),
        }
    }

    #[test]
    fn test_build_file_list_applies_excludes() {
        let dir: TempDir = TempDir::new().unwrap();
        create_docs_tree(dir.path());

        let options: CollectOptions =
            CollectOptions::new(dir.path(), "**/*.[mM][dD]").with_recursive(true);
        let excludes: Vec<String> = vec!["./README.md".to_string(), "*/loose.md".to_string()];
        let files: Vec<String> = build_file_list(&options, &excludes).unwrap();

        assert_eq!(
            files,
            vec![
                "./src/Cat/Sec/OTHER.MD".to_string(),
                "./src/Cat/Sec/article.md".to_string(),
            ]
        );
    }
}
