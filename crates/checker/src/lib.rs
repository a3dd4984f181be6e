//! Directory layout checks for Markdown documentation repositories.
//!
//! Two checks run over a working tree:
//! - Markdown articles must sit at `./src/<category>/<section>/`
//! - Every other file must sit under a section's `assets/` directory
//!
//! `run_checks()` returns a `LintOutcome`; `render_outcome()` prints it.

pub mod check;
pub mod error;
pub mod report;
pub mod rules;

pub use check::{check_assets, check_markdown, run_checks, CheckKind, CheckReport, LintOutcome};
pub use error::CheckError;
pub use report::{render_outcome, render_report, Palette, TermColor};
pub use rules::LayoutRules;
