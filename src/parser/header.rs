//! Header extraction.
//!
//! The header is the run of `!field: value` lines at the top of a file,
//! optionally interleaved with blank and comment lines.

use std::collections::HashSet;

use crate::error::{Result, SyntaxError};
use crate::types::HeaderField;

use super::name::{is_blank, is_comment, is_name, strip_comment};

/// Result of reading the header.
#[derive(Debug)]
pub struct HeaderResult {
    /// Header fields in source order
    pub fields: Vec<HeaderField>,
    /// Index of the line where the forms section starts
    pub forms_start: usize,
}

/// Read header lines from the start of the file.
///
/// Stops at the first line that is not blank, a comment or a header line;
/// that line's index is returned as `forms_start`. When every line belongs
/// to the header, `forms_start` is the index of the last line, so the forms
/// reader looks at that line again.
pub fn read_header<S: AsRef<str>>(lines: &[S]) -> Result<HeaderResult> {
    let mut fields: Vec<HeaderField> = Vec::new();
    let mut seen = HashSet::new();

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let line_number = i + 1;

        if is_blank(line) {
            continue;
        }

        if let Some(entry) = line.strip_prefix('!') {
            let (name, value) = read_header_line(entry).map_err(|e| e.at_line(line_number))?;
            if !seen.insert(name.clone()) {
                return Err(SyntaxError::DuplicateField.at_line(line_number));
            }
            fields.push(HeaderField {
                name,
                value,
                line: line_number,
            });
            continue;
        }

        if is_comment(line) {
            continue;
        }

        return Ok(HeaderResult {
            fields,
            forms_start: i,
        });
    }

    Ok(HeaderResult {
        fields,
        forms_start: lines.len().saturating_sub(1),
    })
}

/// Split `field: value # comment` into a trimmed field name and value.
fn read_header_line(entry: &str) -> std::result::Result<(String, String), SyntaxError> {
    let (field, value) = entry
        .split_once(':')
        .ok_or(SyntaxError::HeaderMissingColon)?;

    let field = field.trim_matches(' ');
    let value = strip_comment(value).trim_matches(' ');

    if !is_name(field) {
        return Err(SyntaxError::InvalidFieldName);
    }
    if value.is_empty() {
        return Err(SyntaxError::EmptyValue);
    }

    Ok((field.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(lines: &[&str]) -> Option<SyntaxError> {
        read_header(lines).err().and_then(|e| e.syntax_kind())
    }

    #[test]
    fn test_read_simple_header() {
        let lines = ["!name: Test  # display name", "", "# comment", "!root:greeting", "greeting: hi"];

        let result = read_header(&lines).unwrap();

        assert_eq!(result.fields.len(), 2);
        assert_eq!(result.fields[0].name, "name");
        assert_eq!(result.fields[0].value, "Test");
        assert_eq!(result.fields[1].name, "root");
        assert_eq!(result.fields[1].value, "greeting");
        assert_eq!(result.fields[1].line, 4);
        assert_eq!(result.forms_start, 4);
    }

    #[test]
    fn test_no_header() {
        let lines = ["greeting: hi"];
        let result = read_header(&lines).unwrap();
        assert!(result.fields.is_empty());
        assert_eq!(result.forms_start, 0);
    }

    #[test]
    fn test_header_only_points_at_last_line() {
        let lines = ["!name: A", "!root: b"];
        let result = read_header(&lines).unwrap();
        assert_eq!(result.forms_start, 1);
    }

    #[test]
    fn test_empty_input() {
        let lines: [&str; 0] = [];
        let result = read_header(&lines).unwrap();
        assert!(result.fields.is_empty());
        assert_eq!(result.forms_start, 0);
    }

    #[test]
    fn test_header_errors() {
        assert_eq!(kind(&["!name Test"]), Some(SyntaxError::HeaderMissingColon));
        assert_eq!(kind(&["!Name: Test"]), Some(SyntaxError::InvalidFieldName));
        assert_eq!(kind(&["!: Test"]), Some(SyntaxError::InvalidFieldName));
        assert_eq!(kind(&["!name:   # nothing"]), Some(SyntaxError::EmptyValue));
        assert_eq!(kind(&["!name: A", "!name: B"]), Some(SyntaxError::DuplicateField));
    }

    #[test]
    fn test_duplicate_field_line() {
        let err = read_header(&["!name: A", "", "!name: B"]).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }
}
