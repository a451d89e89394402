//! The parsed grammar document.

use std::fmt::Write as _;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use super::expansion::Expansion;

/// Encoding assumed when the header does not set one.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// A `!field: value` header entry.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderField {
    pub name: String,
    pub value: String,
    /// Source line (1-indexed)
    pub line: usize,
}

/// One weighted expansion of a form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Case {
    pub weight: f64,
    pub expansion: Expansion,
    /// Source line (1-indexed)
    #[serde(skip)]
    pub line: usize,
}

impl Case {
    pub fn new(weight: f64, expansion: Expansion, line: usize) -> Self {
        Self {
            weight,
            expansion,
            line,
        }
    }
}

/// A form tag with its cases, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub tag: String,
    pub cases: Vec<Case>,
    /// Line of the tag declaration (1-indexed)
    pub line: usize,
}

impl Form {
    /// Sum of all case weights.
    pub fn total_weight(&self) -> f64 {
        self.cases.iter().map(|c| c.weight).sum()
    }

    /// Tag names referenced by any case of this form.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().flat_map(|c| c.expansion.tags())
    }
}

/// A parsed `.pcfg` file: header fields plus tagged, weighted forms.
///
/// Built in one pass by [`crate::parser::read_lines`] and never mutated
/// afterwards. Both header fields and forms keep their source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    header: Vec<HeaderField>,
    forms: Vec<Form>,
}

impl Document {
    pub(crate) fn new(header: Vec<HeaderField>, forms: Vec<Form>) -> Self {
        Self { header, forms }
    }

    /// Get a header value by field name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn header_fields(&self) -> &[HeaderField] {
        &self.header
    }

    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    /// Get a form by tag.
    pub fn form(&self, tag: &str) -> Option<&Form> {
        self.forms.iter().find(|f| f.tag == tag)
    }

    pub fn contains_form(&self, tag: &str) -> bool {
        self.form(tag).is_some()
    }

    pub fn form_tags(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().map(|f| f.tag.as_str())
    }

    /// The tag of the root form (`!root:`).
    pub fn root(&self) -> Option<&str> {
        self.header("root")
    }

    /// The externally supplied input tag of a transform (`!input:`).
    pub fn input(&self) -> Option<&str> {
        self.header("input")
    }

    pub fn name(&self) -> Option<&str> {
        self.header("name")
    }

    /// The declared encoding, `utf-8` when unset.
    pub fn encoding(&self) -> &str {
        self.header("encoding").unwrap_or(DEFAULT_ENCODING)
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.forms.is_empty()
    }

    /// Render the document as canonical `.pcfg` source.
    ///
    /// Single-case forms are written inline, weights of `1` are omitted.
    pub fn to_source(&self) -> String {
        let mut out = String::new();

        for field in &self.header {
            let _ = writeln!(out, "!{}: {}", field.name, field.value);
        }

        for form in &self.forms {
            if !out.is_empty() {
                out.push('\n');
            }
            match form.cases.as_slice() {
                [case] => {
                    let _ = writeln!(out, "{}: {}", form.tag, format_case(case));
                }
                cases => {
                    let _ = writeln!(out, "{}:", form.tag);
                    for case in cases {
                        let _ = writeln!(out, "  {}", format_case(case));
                    }
                }
            }
        }

        // A trailing header line would be re-read as a forms line
        if self.forms.is_empty() && !self.header.is_empty() {
            out.push('\n');
        }

        out
    }
}

fn format_case(case: &Case) -> String {
    if case.weight == 1.0 {
        case.expansion.to_string()
    } else {
        format!("{} {}", case.weight, case.expansion)
    }
}

/// Serializes as `{ "header": {field: value}, "forms": {tag: [case]} }`,
/// keeping source order.
impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Document", 2)?;
        state.serialize_field("header", &HeaderMap(&self.header))?;
        state.serialize_field("forms", &FormMap(&self.forms))?;
        state.end()
    }
}

struct HeaderMap<'a>(&'a [HeaderField]);

impl Serialize for HeaderMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for field in self.0 {
            map.serialize_entry(&field.name, &field.value)?;
        }
        map.end()
    }
}

struct FormMap<'a>(&'a [Form]);

impl Serialize for FormMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for form in self.0 {
            map.serialize_entry(&form.tag, &form.cases)?;
        }
        map.end()
    }
}
