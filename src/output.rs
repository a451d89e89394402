//! Terminal reporting for `pcfg check`, `list` and `init`.
//!
//! Progress goes to stderr as Cargo-style lines with a right-aligned verb
//! (`    Checking grammars/names.pcfg`). stdout carries only `pcfg show`
//! output, so it can be piped.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::{Diagnostic, Severity};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const VERB_WIDTH: usize = 12;

/// Writes grammar progress and lint findings to stderr.
///
/// Colour is used only when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits colour codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Progress on a grammar (`Checking`, `Created`, `Finished`).
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Neutral facts (`Grammar`, `Discovered`).
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// A grammar that failed to read.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Print a lint finding for `file`, followed by its help line.
    pub fn diagnostic(&self, file: &str, d: &Diagnostic) {
        let mut stderr = io::stderr().lock();
        for line in self.format_diagnostic(file, d) {
            let _ = writeln!(stderr, "{line}");
        }
    }

    /// Render a finding as
    /// `error[pcfg::lint::unresolved-tag]: message grammar.pcfg:3`,
    /// with an indented `help:` line when the code has one.
    fn format_diagnostic(&self, file: &str, d: &Diagnostic) -> Vec<String> {
        let location = match d.line {
            Some(line) => format!("{}:{}", file, line),
            None => file.to_string(),
        };
        let colour = match d.severity() {
            Severity::Error => RED,
            Severity::Warning => YELLOW,
        };
        let label = self.paint(colour, &format!("{}[{}]", d.severity(), d.code));

        let mut lines = vec![format!(
            "{:>VERB_WIDTH$} {}: {} {}",
            "",
            label,
            d.message,
            self.dim(&location)
        )];
        if let Some(help) = d.help() {
            lines.push(format!("{:>VERB_WIDTH$}   help: {}", "", help));
        }
        lines
    }

    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{BOLD}{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// `plural(1, "form", "forms")` → "1 form".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Grammar path relative to the working directory when it lies below it.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::LintCode;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "form", "forms"), "1 form");
        assert_eq!(plural(0, "form", "forms"), "0 forms");
        assert_eq!(plural(3, "case", "cases"), "3 cases");
    }

    #[test]
    fn test_plain_printer_has_no_escapes() {
        let printer = Printer::plain();
        assert_eq!(printer.dim("x"), "x");
        assert_eq!(printer.bold("x"), "x");
    }

    #[test]
    fn test_format_diagnostic_with_help() {
        let d = Diagnostic::new(LintCode::UnresolvedTag, "Form 'a' references undefined tag 'b'")
            .at_line(3);
        let lines = Printer::plain().format_diagnostic("names.pcfg", &d);

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0].trim_start(),
            "error[pcfg::lint::unresolved-tag]: Form 'a' references undefined tag 'b' names.pcfg:3"
        );
        assert!(lines[1].trim_start().starts_with("help: Define the form"));
    }

    #[test]
    fn test_format_diagnostic_without_line_or_help() {
        let d = Diagnostic::new(LintCode::UnreachableForm, "Form 'c' is not reachable");
        let lines = Printer::plain().format_diagnostic("names.pcfg", &d);

        assert_eq!(
            lines,
            vec![format!(
                "{:>12} warning[pcfg::lint::unreachable-form]: Form 'c' is not reachable names.pcfg",
                ""
            )]
        );
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = Path::new("/nonexistent/path/to/file.pcfg");
        assert_eq!(display_path(p), "/nonexistent/path/to/file.pcfg");
    }
}
