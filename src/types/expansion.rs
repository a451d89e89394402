//! Form expansions.
//!
//! An expansion is what a form case emits when the generator picks it:
//! - `Literal` - text emitted verbatim
//! - `Concatenation` - literals and tags emitted in sequence
//! - `Tag` - a reference to another form (or an injected input tag)

use std::fmt;

use serde::Serialize;

use crate::parser::name::{has_forbidden, ELEMENT_FORBIDDEN};

/// A production emitted by a form case.
///
/// `Concatenation` elements are only ever `Literal` or `Tag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Expansion {
    Literal(String),
    Concatenation(Vec<Expansion>),
    Tag(String),
}

impl Expansion {
    pub fn literal(content: impl Into<String>) -> Self {
        Expansion::Literal(content.into())
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Expansion::Tag(name.into())
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Expansion::Tag(_))
    }

    /// Tag names referenced by this expansion, in order of appearance.
    pub fn tags(&self) -> Vec<&str> {
        match self {
            Expansion::Literal(_) => vec![],
            Expansion::Tag(name) => vec![name.as_str()],
            Expansion::Concatenation(elements) => {
                elements.iter().flat_map(|e| e.tags()).collect()
            }
        }
    }
}

/// Renders the expansion as it would appear on a case line.
impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expansion::Literal(content) => {
                if is_bare_case_literal(content) {
                    f.write_str(content)
                } else {
                    write!(f, "\"{}\"", content)
                }
            }
            Expansion::Tag(name) => write!(f, "${}", name),
            Expansion::Concatenation(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    match element {
                        Expansion::Literal(content) if is_bare_element(content) => {
                            f.write_str(content)?
                        }
                        Expansion::Literal(content) => write!(f, "\"{}\"", content)?,
                        other => write!(f, "{}", other)?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}

/// A literal that reads back unchanged without quotes on a case line.
fn is_bare_case_literal(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with(' ')
        && !s.ends_with(' ')
        && !has_forbidden(s, ELEMENT_FORBIDDEN)
}

/// A literal that reads back unchanged without quotes inside `[...]`.
fn is_bare_element(s: &str) -> bool {
    !s.is_empty() && !s.contains(' ') && !has_forbidden(s, ELEMENT_FORBIDDEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_in_concatenation() {
        let exp = Expansion::Concatenation(vec![
            Expansion::tag("first"),
            Expansion::literal("of"),
            Expansion::tag("second"),
        ]);
        assert_eq!(exp.tags(), vec!["first", "second"]);
        assert!(!exp.is_tag());
    }

    #[test]
    fn test_display_bare_literal() {
        assert_eq!(Expansion::literal("hello world").to_string(), "hello world");
    }

    #[test]
    fn test_display_quotes_when_needed() {
        assert_eq!(Expansion::literal("room 101").to_string(), "\"room 101\"");
        assert_eq!(Expansion::literal(" padded").to_string(), "\" padded\"");
        assert_eq!(Expansion::literal("").to_string(), "\"\"");
        assert_eq!(Expansion::literal("a#b").to_string(), "\"a#b\"");
    }

    #[test]
    fn test_display_concatenation() {
        let exp = Expansion::Concatenation(vec![
            Expansion::literal("hello"),
            Expansion::tag("name"),
            Expansion::literal("!"),
        ]);
        assert_eq!(exp.to_string(), "[hello $name \"!\"]");
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_string(&Expansion::tag("name")).unwrap();
        assert_eq!(json, r#"{"kind":"tag","value":"name"}"#);
    }
}
