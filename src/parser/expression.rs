//! Concatenation element reader.

use crate::error::SyntaxError;
use crate::types::Expansion;

use super::name::{has_forbidden, is_name, ELEMENT_FORBIDDEN};

/// Read one element of a `[...]` concatenation.
///
/// `s` is a single space-delimited piece of the bracket interior. Elements
/// may be bare literals, quoted literals or tag references, never another
/// concatenation.
pub fn read_form_expression(s: &str) -> Result<Expansion, SyntaxError> {
    if s.is_empty() {
        return Err(SyntaxError::EmptyExpression);
    }

    if let Some(quoted) = s.strip_prefix('"') {
        let (content, rest) = quoted
            .split_once('"')
            .ok_or(SyntaxError::UnterminatedQuote)?;
        if !rest.is_empty() {
            return Err(SyntaxError::TrailingContent);
        }
        return Ok(Expansion::literal(content));
    }

    if let Some(tag) = s.strip_prefix('$') {
        if !is_name(tag) {
            return Err(SyntaxError::InvalidTag);
        }
        return Ok(Expansion::tag(tag));
    }

    if s.starts_with('[') {
        return Err(SyntaxError::NestedConcatenation);
    }

    if has_forbidden(s, ELEMENT_FORBIDDEN) {
        return Err(SyntaxError::InvalidLiteral);
    }

    Ok(Expansion::literal(s))
}
