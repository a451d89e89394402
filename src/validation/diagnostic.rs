//! Lint findings for a grammar.
//!
//! Every finding carries a [`LintCode`]. The code fixes its severity and
//! help text, so checks only supply the message and the line.

use std::fmt;

/// How much a finding matters to `pcfg check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Reported; fails the check only in strict mode
    Warning,
    /// Always fails the check
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// The kinds of problem the lint pass reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LintCode {
    MissingRoot,
    UndefinedRoot,
    UnresolvedTag,
    InputShadowed,
    UnreachableForm,
    UnknownEncoding,
}

impl LintCode {
    pub fn as_str(self) -> &'static str {
        match self {
            LintCode::MissingRoot => "pcfg::lint::missing-root",
            LintCode::UndefinedRoot => "pcfg::lint::undefined-root",
            LintCode::UnresolvedTag => "pcfg::lint::unresolved-tag",
            LintCode::InputShadowed => "pcfg::lint::input-shadowed",
            LintCode::UnreachableForm => "pcfg::lint::unreachable-form",
            LintCode::UnknownEncoding => "pcfg::lint::unknown-encoding",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            LintCode::UndefinedRoot | LintCode::UnresolvedTag => Severity::Error,
            LintCode::MissingRoot
            | LintCode::InputShadowed
            | LintCode::UnreachableForm
            | LintCode::UnknownEncoding => Severity::Warning,
        }
    }

    pub fn help(self) -> Option<&'static str> {
        match self {
            LintCode::MissingRoot => Some("Add a `!root: <tag>` header line"),
            LintCode::UndefinedRoot => Some("Declare the root form with at least one case"),
            LintCode::UnresolvedTag => {
                Some("Define the form, or declare it with `!input:` for transforms")
            }
            LintCode::InputShadowed => {
                Some("The injected input replaces this form when generating")
            }
            LintCode::UnreachableForm => None,
            LintCode::UnknownEncoding => Some("Remove the `!encoding:` line or set it to utf-8"),
        }
    }
}

impl fmt::Display for LintCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lint finding, optionally tied to a source line.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub code: LintCode,
    pub message: String,
    /// Source line (1-indexed)
    pub line: Option<usize>,
}

impl Diagnostic {
    pub fn new(code: LintCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            line: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    pub fn help(&self) -> Option<&'static str> {
        self.code.help()
    }
}

/// Findings for one grammar, in the order the checks produced them.
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    diagnostics: Vec<Diagnostic>,
}

impl LintReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn merge(&mut self, other: LintReport) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// True when nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    /// Whether the grammar fails `pcfg check`. Strict mode also fails on warnings.
    pub fn fails(&self, strict: bool) -> bool {
        self.has_errors() || (strict && self.has_warnings())
    }

    pub fn contains(&self, code: LintCode) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }
}

impl FromIterator<Diagnostic> for LintReport {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            diagnostics: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fixes_severity() {
        assert_eq!(LintCode::UnresolvedTag.severity(), Severity::Error);
        assert_eq!(LintCode::UnreachableForm.severity(), Severity::Warning);
        assert_eq!(LintCode::MissingRoot.to_string(), "pcfg::lint::missing-root");
    }

    #[test]
    fn test_clean_report() {
        let report = LintReport::new();
        assert!(report.is_clean());
        assert!(!report.fails(true));
    }

    #[test]
    fn test_strict_fails_on_warnings() {
        let report: LintReport = [Diagnostic::new(LintCode::MissingRoot, "No root form declared")]
            .into_iter()
            .collect();

        assert!(!report.fails(false));
        assert!(report.fails(true));
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn test_merge() {
        let mut a = LintReport::new();
        a.push(Diagnostic::new(LintCode::UndefinedRoot, "Root form 'x' is not defined").at_line(2));

        let mut b = LintReport::new();
        b.push(Diagnostic::new(LintCode::UnknownEncoding, "latin-1"));

        a.merge(b);
        assert_eq!(a.error_count(), 1);
        assert_eq!(a.warning_count(), 1);
        assert!(a.contains(LintCode::UnknownEncoding));
        assert_eq!(a.iter().next().and_then(|d| d.line), Some(2));
    }
}
