//! Case line reader.
//!
//! A case line is an optional weight followed by one expansion:
//!
//! ```text
//! 2 Alice            weighted bare literal
//! "quoted text"      quoted literal
//! $other-tag         tag reference
//! 1.5 [the $noun]    weighted concatenation
//! ```

use crate::error::SyntaxError;
use crate::types::Expansion;

use super::expression::read_form_expression;
use super::name::{has_forbidden, is_name, strip_comment, CASE_FORBIDDEN};

/// Weight of a case without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Read one case: a weight and its expansion.
///
/// `s` is the case text with the two-space indent already removed (or the
/// inline remainder of a tag declaration).
pub fn read_form_case(s: &str) -> Result<(f64, Expansion), SyntaxError> {
    let (weight, source) = match s.chars().next() {
        Some(c) if c.is_numeric() => {
            let (token, rest) = s.split_once(' ').ok_or(SyntaxError::NoValueWithWeight)?;
            if rest.is_empty() {
                return Err(SyntaxError::NoValueWithWeight);
            }
            (parse_weight(token)?, rest)
        }
        _ => (DEFAULT_WEIGHT, s),
    };

    Ok((weight, read_expansion(source)?))
}

/// Parse a weight numeral (`2`, `0.5`, `1.25`).
///
/// Weights must be positive and finite.
fn parse_weight(token: &str) -> Result<f64, SyntaxError> {
    let weight: f64 = token.parse().map_err(|_| SyntaxError::InvalidWeight)?;
    if !weight.is_finite() || weight <= 0.0 {
        return Err(SyntaxError::InvalidWeight);
    }
    Ok(weight)
}

fn read_expansion(source: &str) -> Result<Expansion, SyntaxError> {
    if let Some(quoted) = source.strip_prefix('"') {
        let (content, rest) = quoted
            .split_once('"')
            .ok_or(SyntaxError::UnterminatedQuote)?;
        ensure_nothing_after(rest)?;
        return Ok(Expansion::literal(content));
    }

    if let Some(tag) = source.strip_prefix('$') {
        let tag = strip_comment(tag).trim_end_matches(' ');
        if !is_name(tag) {
            return Err(SyntaxError::InvalidTag);
        }
        return Ok(Expansion::tag(tag));
    }

    if let Some(bracketed) = source.strip_prefix('[') {
        let (content, rest) = bracketed
            .split_once(']')
            .ok_or(SyntaxError::UnmatchedBracket)?;
        ensure_nothing_after(rest)?;
        let elements = content
            .split(' ')
            .map(read_form_expression)
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Expansion::Concatenation(elements));
    }

    if source.starts_with(' ') {
        return Err(SyntaxError::ImproperIndentation);
    }

    // `2 #note` leaves an empty literal
    let content = strip_comment(source).trim_end_matches(' ');
    if has_forbidden(content, CASE_FORBIDDEN) {
        return Err(SyntaxError::InvalidLiteral);
    }

    Ok(Expansion::literal(content))
}

/// Only spaces and a comment may follow a closing quote or bracket.
fn ensure_nothing_after(rest: &str) -> Result<(), SyntaxError> {
    if strip_comment(rest).trim_matches(' ').is_empty() {
        Ok(())
    } else {
        Err(SyntaxError::TrailingContent)
    }
}
