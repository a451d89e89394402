//! Forms section reader.
//!
//! After the header, each non-blank line is either a tag declaration
//! (`tag:` or `tag: inline case`) or a case line indented by exactly two
//! spaces that belongs to the most recently opened tag.

use std::collections::HashSet;

use crate::error::{Result, SyntaxError};
use crate::types::{Case, Form};

use super::case::read_form_case;
use super::name::{is_blank, is_comment, is_name};

/// Indent that marks a case line.
const CASE_INDENT: &str = "  ";

/// Whether a tag declaration is waiting for indented case lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormState {
    NoOpenTag,
    /// Index into the forms being built
    OpenTag(usize),
}

impl FormState {
    /// An open tag must have received at least one case before it closes.
    fn close(self, forms: &[Form], line: usize) -> Result<()> {
        match self {
            FormState::OpenTag(index) if forms[index].cases.is_empty() => {
                Err(SyntaxError::EmptyFormStatement.at_line(line))
            }
            _ => Ok(()),
        }
    }
}

/// Read the forms section starting at line index `start`.
///
/// Line numbers in errors are absolute (1-indexed) positions in `lines`.
pub fn read_forms<S: AsRef<str>>(lines: &[S], start: usize) -> Result<Vec<Form>> {
    let mut forms: Vec<Form> = Vec::new();
    let mut tags: HashSet<String> = HashSet::new();
    let mut state = FormState::NoOpenTag;

    for (offset, line) in lines.iter().enumerate().skip(start) {
        let line = line.as_ref();
        let line_number = offset + 1;

        if is_blank(line) {
            continue;
        }

        if line.starts_with('!') {
            return Err(SyntaxError::HeaderAfterForms.at_line(line_number));
        }

        if is_comment(line) {
            continue;
        }

        if let Some(case) = line.strip_prefix(CASE_INDENT) {
            let index = match state {
                FormState::OpenTag(index) => index,
                FormState::NoOpenTag => {
                    return Err(SyntaxError::CaseWithoutTag.at_line(line_number))
                }
            };
            let (weight, expansion) =
                read_form_case(case).map_err(|e| e.at_line(line_number))?;
            forms[index].cases.push(Case::new(weight, expansion, line_number));
            continue;
        }

        state.close(&forms, line_number)?;

        let (tag, rest) = line
            .split_once(':')
            .ok_or_else(|| SyntaxError::TagMissingColon.at_line(line_number))?;
        let tag = tag.trim_matches(' ');
        let rest = rest.trim_start_matches(' ');

        if !is_name(tag) {
            return Err(SyntaxError::InvalidTagName.at_line(line_number));
        }
        if !tags.insert(tag.to_string()) {
            return Err(SyntaxError::DuplicateTag.at_line(line_number));
        }

        if rest.is_empty() || rest.starts_with('#') {
            forms.push(Form {
                tag: tag.to_string(),
                cases: Vec::new(),
                line: line_number,
            });
            state = FormState::OpenTag(forms.len() - 1);
        } else {
            let (weight, expansion) =
                read_form_case(rest).map_err(|e| e.at_line(line_number))?;
            forms.push(Form {
                tag: tag.to_string(),
                cases: vec![Case::new(weight, expansion, line_number)],
                line: line_number,
            });
            state = FormState::NoOpenTag;
        }
    }

    state.close(&forms, lines.len())?;

    Ok(forms)
}
