//! The Markdown and asset layout checks.

use std::path::Path;

use doc_structure_filesystem::{build_file_list, validate_path_depth, CollectOptions};

use crate::error::CheckError;
use crate::rules::LayoutRules;

/// Which layout check produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// Markdown articles must sit at the article depth.
    Markdown,
    /// Non-Markdown files must sit in an allowed location.
    Assets,
}

impl CheckKind {
    /// Short name used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            CheckKind::Markdown => "markdown",
            CheckKind::Assets => "assets",
        }
    }
}

/// Result of one layout check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// The check that ran.
    pub kind: CheckKind,
    /// Misplaced files, in collection order.
    pub failures: Vec<String>,
}

impl CheckReport {
    /// Create a report.
    pub fn new(kind: CheckKind, failures: Vec<String>) -> Self {
        Self { kind, failures }
    }

    /// `true` if no file was misplaced.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Aggregate result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOutcome {
    /// Markdown article check.
    pub markdown: CheckReport,
    /// Asset check.
    pub assets: CheckReport,
}

impl LintOutcome {
    /// `true` if both checks passed.
    pub fn passed(&self) -> bool {
        self.markdown.passed() && self.assets.passed()
    }

    /// Process exit status: 0 on pass, 1 on any failure.
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    /// Reports in the order they are printed.
    pub fn reports(&self) -> [&CheckReport; 2] {
        [&self.markdown, &self.assets]
    }
}

/// Find Markdown articles not at the required depth.
///
/// # Arguments
/// * `root` - Repository root to scan
/// * `rules` - Layout rules
///
/// # Errors
/// Returns error if the tree cannot be walked or a pattern is invalid.
pub fn check_markdown(root: &Path, rules: &LayoutRules) -> Result<CheckReport, CheckError> {
    let kind: CheckKind = CheckKind::Markdown;
    let options: CollectOptions = collect_options(root, &rules.markdown_mask, rules);
    let articles: Vec<String> = build_file_list(&options, &rules.markdown_excludes)
        .map_err(|e| CheckError::file_system(kind.name(), e))?;

    let failures: Vec<String> = validate_path_depth(&articles, rules.article_depth);
    log::info!(
        "Markdown check: {} articles, {} misplaced",
        articles.len(),
        failures.len()
    );
    Ok(CheckReport::new(kind, failures))
}

/// Find non-Markdown files outside the allowed locations.
///
/// Depth is not validated here: any asset that survives the exclusion list
/// is misplaced.
///
/// # Arguments
/// * `root` - Repository root to scan
/// * `rules` - Layout rules
///
/// # Errors
/// Returns error if the tree cannot be walked or a pattern is invalid.
pub fn check_assets(root: &Path, rules: &LayoutRules) -> Result<CheckReport, CheckError> {
    let kind: CheckKind = CheckKind::Assets;
    let options: CollectOptions = collect_options(root, &rules.asset_mask, rules);
    let failures: Vec<String> = build_file_list(&options, &rules.asset_excludes)
        .map_err(|e| CheckError::file_system(kind.name(), e))?
        .into_iter()
        .filter(|path: &String| is_asset_path(path))
        .collect();

    log::info!("Asset check: {} misplaced files", failures.len());
    Ok(CheckReport::new(kind, failures))
}

/// Run both checks over `root`.
///
/// Both checks always run; a failing Markdown check does not skip the asset
/// check.
///
/// # Arguments
/// * `root` - Repository root to scan
/// * `rules` - Layout rules
///
/// # Errors
/// Returns the first error that prevented a check from completing.
pub fn run_checks(root: &Path, rules: &LayoutRules) -> Result<LintOutcome, CheckError> {
    log::debug!("Checking layout under {}", root.display());
    let markdown: CheckReport = check_markdown(root, rules)?;
    let assets: CheckReport = check_assets(root, rules)?;
    Ok(LintOutcome { markdown, assets })
}

fn collect_options(root: &Path, mask: &str, rules: &LayoutRules) -> CollectOptions {
    CollectOptions::new(root, mask)
        .with_recursive(true)
        .with_include_hidden(rules.include_hidden)
}

/// A file with a non-empty extension other than `md`. `notes.` has none.
fn is_asset_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext: &str| !ext.is_empty() && !ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}
