//! Shared constants used across doc-structure crates.

/// Required number of segments in an article's parent directory.
/// `./src/<category>/<section>` counts the root marker as the first segment.
pub const ARTICLE_PATH_DEPTH: usize = 4;

/// Marker prepended to every reported path so the scan root is its first segment.
pub const ROOT_MARKER: &str = ".";

/// Separator used in reported paths, independent of the host OS.
pub const PATH_SEPARATOR: char = '/';
