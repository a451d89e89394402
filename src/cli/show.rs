//! Show command implementation.
//!
//! Prints a parsed grammar to stdout.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{PcfgError, Result};
use crate::parser::read;
use crate::types::Document;

/// Output format for `pcfg show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Canonical .pcfg source
    Pcfg,
}

/// Print a parsed grammar as JSON or canonical source
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Grammar file to show
    pub file: PathBuf,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = ShowFormat::Json)]
    pub format: ShowFormat,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let doc = read(&args.file)?;
    print!("{}", render(&doc, args.format)?);
    Ok(())
}

/// Render a document in the requested format.
pub fn render(doc: &Document, format: ShowFormat) -> Result<String> {
    match format {
        ShowFormat::Json => serde_json::to_string_pretty(doc)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| PcfgError::Check {
                message: format!("Failed to serialize grammar: {}", e),
                help: None,
            }),
        ShowFormat::Pcfg => Ok(doc.to_source()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::read_str;

    #[test]
    fn test_render_json() {
        let doc = read_str("!root: a\na:\n  2 x\n  $b\nb: y").unwrap();
        let json = render(&doc, ShowFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["header"]["root"], "a");
        assert_eq!(value["forms"]["a"][0]["weight"], 2.0);
        assert_eq!(value["forms"]["a"][1]["expansion"]["kind"], "tag");
        assert_eq!(value["forms"]["b"][0]["expansion"]["value"], "y");
    }

    #[test]
    fn test_render_pcfg() {
        let doc = read_str("!root:a\na:   # comment\n  2 x # note\n  $b\nb: y").unwrap();
        let source = render(&doc, ShowFormat::Pcfg).unwrap();
        assert_eq!(source, "!root: a\n\na:\n  2 x\n  $b\n\nb: y\n");
    }
}
