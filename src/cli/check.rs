//! Check command implementation.
//!
//! Parses every discovered grammar and runs the lint pass over it.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::{PcfgError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::read;
use crate::validation::lint_document;

/// Parse and lint grammar files
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check (default: project in current directory)
    pub files: Vec<PathBuf>,

    /// Treat lint warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Totals from a check run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub checked: usize,
    pub failed: usize,
    pub warnings: usize,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.files.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.files)?
    };
    let strict = args.strict || discovery.manifest.strict;

    if discovery.scan.is_empty() {
        printer.warning("Skipping", "no .pcfg files found");
        return Ok(());
    }

    let summary = check_files(&discovery.scan.grammars, strict, printer);

    if summary.failed > 0 {
        return Err(PcfgError::Check {
            message: format!(
                "{} of {} failed",
                summary.failed,
                plural(summary.checked, "grammar", "grammars")
            ),
            help: strict.then(|| "Strict mode treats warnings as errors".to_string()),
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} checked ({})",
            plural(summary.checked, "grammar", "grammars"),
            plural(summary.warnings, "warning", "warnings")
        ),
    );

    Ok(())
}

/// Check each file, reporting as it goes.
pub fn check_files(files: &[PathBuf], strict: bool, printer: &Printer) -> CheckSummary {
    let mut summary = CheckSummary::default();

    for file in files {
        let display = display_path(file);
        printer.status("Checking", &display);
        summary.checked += 1;

        let doc = match read(file) {
            Ok(doc) => doc,
            Err(e) => {
                printer.error("Failed", &format!("{}: {}", display, e));
                summary.failed += 1;
                continue;
            }
        };

        let result = lint_document(&doc);
        for d in result.iter() {
            printer.diagnostic(&display, d);
        }

        summary.warnings += result.warning_count();
        if result.fails(strict) {
            summary.failed += 1;
        }
    }

    summary
}
