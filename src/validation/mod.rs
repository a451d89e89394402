//! Lint pass for parsed grammars.
//!
//! The parser only enforces syntax. These checks look at how forms fit
//! together (root, references, reachability) and report errors and
//! warnings without failing the parse. Used by `pcfg check`.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, LintCode, LintReport, Severity};

use crate::types::Document;

/// Run all lint checks against a document.
pub fn lint_document(doc: &Document) -> LintReport {
    let mut result = LintReport::new();

    result.merge(checks::check_root(doc));
    result.merge(checks::check_references(doc));
    result.merge(checks::check_input_shadowing(doc));
    result.merge(checks::check_reachability(doc));
    result.merge(checks::check_encoding(doc));

    result
}
