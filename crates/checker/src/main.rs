//! `doc-structure`: check the directory layout of a documentation repository.
//!
//! Exit status: 0 when the layout is valid, 1 when files are misplaced,
//! 2 when the check could not run.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use doc_structure_checker::{render_outcome, run_checks, LayoutRules, LintOutcome, Palette};

const EXIT_ERROR: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "doc-structure", version, about = "Check the directory layout of Markdown documentation")]
struct Cli {
    /// Repository root to scan
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Disable ANSI colors in the report
    #[arg(long)]
    no_color: bool,

    /// Required number of segments in an article's parent directory
    #[arg(long, value_name = "N")]
    article_depth: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    let mut rules: LayoutRules = LayoutRules::default();
    if let Some(depth) = cli.article_depth {
        rules = rules.with_article_depth(depth);
    }

    let outcome: LintOutcome = match run_checks(&cli.root, &rules) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = render_outcome(&mut out, &outcome, Palette::new(!cli.no_color)) {
        eprintln!("error: failed to write report: {e}");
        return ExitCode::from(EXIT_ERROR);
    }

    ExitCode::from(outcome.exit_code())
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level: &str = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
