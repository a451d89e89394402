//! Whole-document reading.
//!
//! A file is read in two passes over its lines: the header, then the forms.
//! A final check rejects forms whose only case is a bare tag reference.

use std::path::Path;

use crate::error::{PcfgError, Result, SyntaxError};
use crate::types::{Document, Form};

use super::forms::read_forms;
use super::header::read_header;

/// Read and parse the `.pcfg` file at `path`.
///
/// The file is read fully and closed before parsing starts.
pub fn read(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| PcfgError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read grammar: {}", e),
    })?;

    read_str(&source)
}

/// Parse `.pcfg` source text.
pub fn read_str(source: &str) -> Result<Document> {
    let lines: Vec<&str> = source.lines().collect();
    read_lines(&lines)
}

/// Parse a file's lines (without trailing newline characters).
///
/// Fails on the first malformed construct; errors carry the 1-indexed line.
pub fn read_lines<S: AsRef<str>>(lines: &[S]) -> Result<Document> {
    let header = read_header(lines)?;
    let forms = read_forms(lines, header.forms_start)?;

    check_singleton_tags(&forms)?;

    Ok(Document::new(header.fields, forms))
}

/// A form with a single case may not simply alias another tag.
fn check_singleton_tags(forms: &[Form]) -> Result<()> {
    match forms
        .iter()
        .find(|f| matches!(f.cases.as_slice(), [case] if case.expansion.is_tag()))
    {
        Some(form) => Err(SyntaxError::SingletonTagExpansion.at_line(form.line)),
        None => Ok(()),
    }
}
