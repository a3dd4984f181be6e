//! Parent directory depth validation.

use doc_structure_common::PATH_SEPARATOR;

/// Count the segments of a path's parent directory.
///
/// The parent is everything before the last `/`, with trailing separators
/// removed. Segments are counted by a plain split, so the root marker counts
/// and empty segments (`a//b`, leading `/`) count too.
///
/// # Arguments
/// * `path` - Reported path, e.g. `./src/Cat/Sec/article.md`
///
/// # Returns
/// Number of parent segments; `0` when the path has no parent.
pub fn parent_depth(path: &str) -> usize {
    let head: &str = match path.rfind(PATH_SEPARATOR) {
        Some(index) => &path[..=index],
        None => return 0,
    };

    // `a/b//file` has parent `a/b`; `/file` keeps `/` as its parent
    let trimmed: &str = head.trim_end_matches(PATH_SEPARATOR);
    let parent: &str = if trimmed.is_empty() { head } else { trimmed };
    parent.split(PATH_SEPARATOR).count()
}

/// Find files whose parent directory is not exactly `depth` segments deep.
///
/// Too shallow and too deep are reported the same way.
///
/// # Arguments
/// * `files` - Paths to validate
/// * `depth` - Required parent segment count
///
/// # Returns
/// The failing paths, in input order.
pub fn validate_path_depth(files: &[String], depth: usize) -> Vec<String> {
    let failed: Vec<String> = files
        .iter()
        .filter(|path: &&String| parent_depth(path) != depth)
        .cloned()
        .collect();

    log::debug!(
        "Depth check ({} segments): {} of {} paths failed",
        depth,
        failed.len(),
        files.len()
    );
    failed
}
