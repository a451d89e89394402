//! pcfg - Weighted form grammar files
//!
//! A library for reading `.pcfg` files: a header of metadata fields followed
//! by tagged forms, each a list of weighted expansions that a generator
//! samples from.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest};
pub use error::{PcfgError, Result, SyntaxError};
pub use parser::{is_name, read, read_lines, read_str};
pub use types::{Case, Document, Expansion, Form, HeaderField};
pub use validation::{lint_document, Diagnostic, LintCode, LintReport, Severity};
