//! Human-readable report rendering with optional ANSI colors.

use std::io::{self, Write};

use crate::check::{CheckKind, CheckReport, LintOutcome};
use crate::rules::{ASSET_LAYOUT_HINT, MARKDOWN_LAYOUT_HINT};

/// Terminal colors used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermColor {
    /// Layout hints.
    Purple,
    /// Failure headings and the failed verdict.
    Red,
    /// The passed verdict.
    Green,
}

impl TermColor {
    /// ANSI escape sequence selecting this color.
    pub fn code(self) -> &'static str {
        match self {
            Self::Purple => "\u{1b}[95m",
            Self::Red => "\u{1b}[91m",
            Self::Green => "\u{1b}[92m",
        }
    }
}

const RESET: &str = "\u{1b}[0m";

/// Emits escape sequences, or nothing when colors are off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colored: bool,
}

impl Palette {
    /// Create a palette.
    ///
    /// # Arguments
    /// * `colored` - Whether to emit ANSI escape sequences
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// A palette without colors.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Escape sequence for `color`, or `""`.
    pub fn color(self, color: TermColor) -> &'static str {
        if self.colored {
            color.code()
        } else {
            ""
        }
    }

    /// Reset sequence, or `""`.
    pub fn reset(self) -> &'static str {
        if self.colored {
            RESET
        } else {
            ""
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Write the failure section of one check. Passing checks write nothing.
///
/// # Arguments
/// * `out` - Destination
/// * `report` - Check to render
/// * `palette` - Color settings
///
/// # Errors
/// Returns error if writing fails.
pub fn render_report<W: Write>(
    out: &mut W,
    report: &CheckReport,
    palette: Palette,
) -> io::Result<()> {
    if report.passed() {
        return Ok(());
    }

    let (heading, subject, hint): (&str, &str, &str) = match report.kind {
        CheckKind::Markdown => (
            "The following MD files did fail the directory structure integrity test:",
            "MD files",
            MARKDOWN_LAYOUT_HINT,
        ),
        CheckKind::Assets => (
            "The following files did fail the assets directory structure integrity test:",
            "Asset files",
            ASSET_LAYOUT_HINT,
        ),
    };

    writeln!(
        out,
        "{}{}{}",
        palette.color(TermColor::Red),
        heading,
        palette.reset()
    )?;
    writeln!(out, "{}", report.failures.join("\n"))?;
    writeln!(
        out,
        "\n{}{} must be placed according to the following directory structure:\n{}{}\n\n",
        palette.color(TermColor::Purple),
        subject,
        palette.reset(),
        hint
    )?;
    Ok(())
}

/// Write both check sections followed by the overall verdict.
///
/// # Arguments
/// * `out` - Destination
/// * `outcome` - Result of `run_checks()`
/// * `palette` - Color settings
///
/// # Errors
/// Returns error if writing fails.
pub fn render_outcome<W: Write>(
    out: &mut W,
    outcome: &LintOutcome,
    palette: Palette,
) -> io::Result<()> {
    for report in outcome.reports() {
        render_report(out, report, palette)?;
    }

    let (color, verdict): (TermColor, &str) = if outcome.passed() {
        (TermColor::Green, "passed")
    } else {
        (TermColor::Red, "failed")
    };
    writeln!(
        out,
        "{}File Structure test has been {}.{}",
        palette.color(color),
        verdict,
        palette.reset()
    )?;
    out.flush()
}
