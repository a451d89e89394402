//! Lint checks for parsed documents.
//!
//! Each check looks at one aspect of how forms fit together and returns a
//! `LintReport`.

use std::collections::HashSet;

use crate::types::{Document, DEFAULT_ENCODING};

use super::diagnostic::{Diagnostic, LintCode, LintReport};

/// Check that the header names a root form that exists.
pub fn check_root(doc: &Document) -> LintReport {
    let root = match doc.root() {
        Some(root) => root,
        None => {
            return [Diagnostic::new(LintCode::MissingRoot, "No root form declared")]
                .into_iter()
                .collect()
        }
    };

    if doc.contains_form(root) || doc.input() == Some(root) {
        return LintReport::new();
    }

    let mut diagnostic = Diagnostic::new(
        LintCode::UndefinedRoot,
        format!("Root form '{}' is not defined", root),
    );
    if let Some(field) = doc.header_fields().iter().find(|f| f.name == "root") {
        diagnostic = diagnostic.at_line(field.line);
    }
    [diagnostic].into_iter().collect()
}

/// Check that every `$tag` reference names a form or the input tag.
pub fn check_references(doc: &Document) -> LintReport {
    let input = doc.input();

    doc.forms()
        .iter()
        .flat_map(|form| form.cases.iter().map(move |case| (form, case)))
        .flat_map(|(form, case)| {
            case.expansion
                .tags()
                .into_iter()
                .filter(move |tag| !doc.contains_form(tag) && input != Some(*tag))
                .map(move |tag| {
                    Diagnostic::new(
                        LintCode::UnresolvedTag,
                        format!("Form '{}' references undefined tag '{}'", form.tag, tag),
                    )
                    .at_line(case.line)
                })
        })
        .collect()
}

/// Check that the input tag is not also defined as a form.
pub fn check_input_shadowing(doc: &Document) -> LintReport {
    doc.input()
        .and_then(|input| doc.form(input))
        .map(|form| {
            Diagnostic::new(
                LintCode::InputShadowed,
                format!("Input tag '{}' is also defined as a form", form.tag),
            )
            .at_line(form.line)
        })
        .into_iter()
        .collect()
}

/// Check for forms that cannot be reached from the root.
///
/// Skipped when the root does not resolve to a form.
pub fn check_reachability(doc: &Document) -> LintReport {
    let root = match doc.root().filter(|r| doc.contains_form(r)) {
        Some(root) => root,
        None => return LintReport::new(),
    };

    let mut reached: HashSet<&str> = HashSet::new();
    let mut pending = vec![root];

    while let Some(tag) = pending.pop() {
        if !reached.insert(tag) {
            continue;
        }
        if let Some(form) = doc.form(tag) {
            pending.extend(form.references());
        }
    }

    doc.forms()
        .iter()
        .filter(|form| !reached.contains(form.tag.as_str()))
        .map(|form| {
            Diagnostic::new(
                LintCode::UnreachableForm,
                format!("Form '{}' is not reachable from root '{}'", form.tag, root),
            )
            .at_line(form.line)
        })
        .collect()
}

/// Check that the declared encoding is one the reader supports.
pub fn check_encoding(doc: &Document) -> LintReport {
    let encoding = doc.encoding();
    if encoding.eq_ignore_ascii_case(DEFAULT_ENCODING) || encoding.eq_ignore_ascii_case("utf8") {
        return LintReport::new();
    }

    let mut diagnostic = Diagnostic::new(
        LintCode::UnknownEncoding,
        format!("Encoding '{}' is not supported; files are read as utf-8", encoding),
    );
    if let Some(field) = doc.header_fields().iter().find(|f| f.name == "encoding") {
        diagnostic = diagnostic.at_line(field.line);
    }
    [diagnostic].into_iter().collect()
}
