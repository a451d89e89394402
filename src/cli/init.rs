//! Init command implementation.
//!
//! Generates a `pcfg.yaml` manifest from discovered grammars.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{scan_directory, Manifest, MANIFEST_FILENAME};
use crate::error::{PcfgError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a pcfg project by generating a pcfg.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing pcfg.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(PcfgError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    // Convention scan; an existing manifest is about to be replaced
    let scan = scan_directory(&args.path, &Manifest::default());

    // Unique parent directories relative to the project root
    let mut source_dirs = BTreeSet::new();
    for file in &scan.grammars {
        if let Some(parent) = file.parent() {
            let relative = parent.strip_prefix(&args.path).unwrap_or(parent);
            let dir = if relative == Path::new("") {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            };
            source_dirs.insert(dir);
        }
    }

    let manifest = Manifest {
        sources: if source_dirs.len() == 1 && source_dirs.contains(".") {
            vec![]
        } else {
            source_dirs.iter().cloned().collect()
        },
        ..Manifest::default()
    };

    fs::write(&manifest_path, manifest.to_yaml()?).map_err(|e| PcfgError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !source_dirs.is_empty() {
        let dirs: Vec<&str> = source_dirs.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(scan.total(), "grammar", "grammars")
        ),
    );

    Ok(())
}
