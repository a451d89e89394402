use miette::Diagnostic;
use thiserror::Error;

/// A malformed construct in a `.pcfg` file.
///
/// The display text is the message a user sees; the line number is attached
/// by [`PcfgError::Syntax`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Empty form expression")]
    EmptyExpression,

    #[error("Mismatched quote")]
    UnterminatedQuote,

    #[error("Invalid form expansion")]
    TrailingContent,

    #[error("Invalid tag")]
    InvalidTag,

    #[error("Nested concatenation")]
    NestedConcatenation,

    #[error("Invalid form expression")]
    InvalidLiteral,

    #[error("No value given with weight")]
    NoValueWithWeight,

    #[error("Invalid weight")]
    InvalidWeight,

    #[error("Mismatched concatenation bracket")]
    UnmatchedBracket,

    #[error("Improperly indented form expansion")]
    ImproperIndentation,

    #[error("No colon in header line")]
    HeaderMissingColon,

    #[error("Invalid field name in header")]
    InvalidFieldName,

    #[error("Empty value in header")]
    EmptyValue,

    #[error("Field set twice in header")]
    DuplicateField,

    #[error("Header line found outside of header")]
    HeaderAfterForms,

    #[error("No form tag specified before case")]
    CaseWithoutTag,

    #[error("Empty form statement")]
    EmptyFormStatement,

    #[error("Tag missing colon")]
    TagMissingColon,

    #[error("Invalid tag name")]
    InvalidTagName,

    #[error("Form tag specified twice")]
    DuplicateTag,

    #[error("Tag at top level in tagged form expression")]
    SingletonTagExpansion,
}

impl SyntaxError {
    /// Attach a 1-based source line.
    pub fn at_line(self, line: usize) -> PcfgError {
        PcfgError::Syntax {
            kind: self,
            line,
            help: self.help().map(str::to_string),
        }
    }

    /// Suggested fix shown under the error by the CLI.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SyntaxError::InvalidTag | SyntaxError::InvalidTagName | SyntaxError::InvalidFieldName => {
                Some("Names are lowercase ASCII letters, digits and '-', starting with a letter")
            }
            SyntaxError::InvalidLiteral => Some(
                "Bare literals cannot contain '$ : [ ] ! \"', tabs or digits; quote the text instead",
            ),
            SyntaxError::ImproperIndentation => Some("Indent case lines by exactly two spaces"),
            SyntaxError::NestedConcatenation => {
                Some("Move the inner concatenation into its own form and reference it with $tag")
            }
            SyntaxError::SingletonTagExpansion => {
                Some("Reference the target tag directly instead of aliasing it")
            }
            SyntaxError::HeaderAfterForms => Some("Move header lines above the first form"),
            SyntaxError::EmptyFormStatement => {
                Some("Add at least one indented case line after the form tag")
            }
            _ => None,
        }
    }
}

/// Main error type for pcfg operations
#[derive(Error, Diagnostic, Debug)]
pub enum PcfgError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pcfg::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("{kind} at line {line}")]
    #[diagnostic(code(pcfg::syntax))]
    Syntax {
        kind: SyntaxError,
        line: usize,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(pcfg::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Check failed: {message}")]
    #[diagnostic(code(pcfg::check))]
    Check {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl PcfgError {
    /// The syntax error kind, if this is a parse failure.
    pub fn syntax_kind(&self) -> Option<SyntaxError> {
        match self {
            PcfgError::Syntax { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The 1-based line of a parse failure.
    pub fn line(&self) -> Option<usize> {
        match self {
            PcfgError::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PcfgError>;
