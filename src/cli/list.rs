//! List command implementation.
//!
//! Discovers grammars and prints a one-line summary for each.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::parser::read;
use crate::types::Document;

/// List discovered grammars
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Files or directories to scan (default: current directory)
    pub files: Vec<PathBuf>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.files.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.files)?
    };

    for file in &discovery.scan.grammars {
        let display = display_path(file);
        match read(file) {
            Ok(doc) => printer.info(
                "Grammar",
                &format!("{} {}", printer.bold(&display), printer.dim(&summarize(&doc))),
            ),
            Err(e) => printer.error("Invalid", &format!("{}: {}", display, e)),
        }
    }

    printer.status(
        "Found",
        &plural(discovery.scan.total(), "grammar", "grammars"),
    );

    Ok(())
}

/// One-line description: name, root and counts.
fn summarize(doc: &Document) -> String {
    let cases: usize = doc.forms().iter().map(|f| f.cases.len()).sum();
    let mut parts = Vec::new();

    if let Some(name) = doc.name() {
        parts.push(format!("\"{}\"", name));
    }
    if let Some(root) = doc.root() {
        parts.push(format!("root ${}", root));
    }
    if let Some(input) = doc.input() {
        parts.push(format!("input ${}", input));
    }
    parts.push(plural(doc.forms().len(), "form", "forms"));
    parts.push(plural(cases, "case", "cases"));

    parts.join(", ")
}
