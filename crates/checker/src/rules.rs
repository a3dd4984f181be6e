//! Layout rules for a documentation repository.
//!
//! The defaults describe the expected tree:
//!
//! ```text
//! ./README.md
//! ./src/<Category>/<Section>/article.md
//! ./src/<Category>/<Section>/assets/image.png
//! ```
//!
//! # Example
//!
//! ```
//! use doc_structure_checker::LayoutRules;
//!
//! let rules = LayoutRules::default().with_article_depth(5);
//! assert_eq!(rules.article_depth, 5);
//! ```

use doc_structure_common::ARTICLE_PATH_DEPTH;

/// Mask selecting Markdown articles, any letter case of the extension.
pub const MARKDOWN_MASK: &str = "**/*.[mM][dD]";

/// Mask selecting asset candidates: any file name containing a `.`.
pub const ASSET_MASK: &str = "**/*.*";

/// Markdown files exempt from the depth check.
pub const DEFAULT_MARKDOWN_EXCLUDES: &[&str] =
    &[".git/*", "./src/TESTING/*.[mM][dD]", "./README.md"];

/// Non-Markdown files allowed outside the article layout.
pub const DEFAULT_ASSET_EXCLUDES: &[&str] = &[
    "./src/*/*/assets/*",
    "./_checks/*",
    "./COPYING.txt",
    "./LICENSE.txt",
];

/// Where articles belong, shown when the Markdown check fails.
pub const MARKDOWN_LAYOUT_HINT: &str = "./src/[Category Name Directory]/[Section Name Directory]/";

/// Where assets belong, shown when the asset check fails.
pub const ASSET_LAYOUT_HINT: &str =
    "./src/[Category Name Directory]/[Section Name Directory]/assets/";

/// Configuration of a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRules {
    /// Required segment count of an article's parent directory.
    pub article_depth: usize,
    /// Mask selecting Markdown articles.
    pub markdown_mask: String,
    /// Exclusion patterns for the Markdown check.
    pub markdown_excludes: Vec<String>,
    /// Mask selecting asset candidates.
    pub asset_mask: String,
    /// Exclusion patterns for the asset check.
    pub asset_excludes: Vec<String>,
    /// Visit entries whose name starts with `.`.
    pub include_hidden: bool,
}

impl Default for LayoutRules {
    fn default() -> Self {
        Self {
            article_depth: ARTICLE_PATH_DEPTH,
            markdown_mask: MARKDOWN_MASK.to_string(),
            markdown_excludes: to_owned_patterns(DEFAULT_MARKDOWN_EXCLUDES),
            asset_mask: ASSET_MASK.to_string(),
            asset_excludes: to_owned_patterns(DEFAULT_ASSET_EXCLUDES),
            include_hidden: false,
        }
    }
}

impl LayoutRules {
    /// Set the required article depth.
    ///
    /// # Arguments
    /// * `depth` - Parent segment count, root marker included
    pub fn with_article_depth(mut self, depth: usize) -> Self {
        self.article_depth = depth;
        self
    }

    /// Replace the Markdown exclusion patterns.
    pub fn with_markdown_excludes(mut self, patterns: Vec<String>) -> Self {
        self.markdown_excludes = patterns;
        self
    }

    /// Replace the asset exclusion patterns.
    pub fn with_asset_excludes(mut self, patterns: Vec<String>) -> Self {
        self.asset_excludes = patterns;
        self
    }

    /// Set whether hidden entries are scanned.
    pub fn with_include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }
}

fn to_owned_patterns(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p: &&str| p.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules: LayoutRules = LayoutRules::default();
        assert_eq!(rules.article_depth, 4);
        assert_eq!(rules.markdown_mask, "**/*.[mM][dD]");
        assert_eq!(rules.markdown_excludes.len(), 3);
        assert_eq!(rules.asset_excludes.len(), 4);
        assert!(!rules.include_hidden);
    }

    #[test]
    fn test_builders() {
        let rules: LayoutRules = LayoutRules::default()
            .with_article_depth(3)
            .with_markdown_excludes(vec![])
            .with_asset_excludes(vec!["./static/*".to_string()])
            .with_include_hidden(true);

        assert_eq!(rules.article_depth, 3);
        assert!(rules.markdown_excludes.is_empty());
        assert_eq!(rules.asset_excludes, vec!["./static/*".to_string()]);
        assert!(rules.include_hidden);
    }
}
