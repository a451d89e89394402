//! File discovery for pcfg projects.
//!
//! Finds `.pcfg` grammar files in a project directory, either by scanning
//! everything under it or by following a `pcfg.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use pcfg::discovery::discover;
//!
//! let result = discover("./my-project")?;
//! println!("Found {} grammars", result.scan.total());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::{is_grammar_file, scan_directory, scan_sources, ScanResult, GRAMMAR_EXTENSION};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "pcfg.yaml";

/// Result of discovering grammars in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no pcfg.yaml was found).
    pub manifest: Manifest,

    /// Whether a pcfg.yaml manifest was found.
    pub has_manifest: bool,

    /// Scan results with discovered files.
    pub scan: ScanResult,
}

/// Discover grammars in a project directory.
///
/// Looks for a `pcfg.yaml` manifest in the root directory. If found, scans
/// the manifest's source paths; otherwise scans the whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let scan = scan_sources(&manifest.effective_sources(), &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover grammars from explicit files and directories (no manifest lookup).
///
/// Files are taken as given, whatever their extension; directories are
/// scanned for `.pcfg` files.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else {
            scan.merge(ScanResult {
                grammars: vec![path.clone()],
            });
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("names.pcfg"), "a: x").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert_eq!(result.scan.total(), 1);
    }

    #[test]
    fn test_discover_with_manifest_sources() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("grammars")).unwrap();
        fs::create_dir_all(dir.path().join("other")).unwrap();
        fs::write(dir.path().join("grammars/a.pcfg"), "a: x").unwrap();
        fs::write(dir.path().join("other/b.pcfg"), "b: x").unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILENAME),
            "sources:\n  - grammars/\nstrict: true\n",
        )
        .unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(result.has_manifest);
        assert!(result.manifest.strict);
        assert_eq!(result.scan.total(), 1);
        assert!(result.scan.grammars[0].ends_with("a.pcfg"));
    }

    #[test]
    fn test_discover_bad_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "strict: [").unwrap();

        assert!(discover(dir.path()).is_err());
    }

    #[test]
    fn test_discover_paths_mixed() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("more")).unwrap();
        fs::write(dir.path().join("single.txt"), "a: x").unwrap();
        fs::write(dir.path().join("more/one.pcfg"), "a: x").unwrap();
        fs::write(dir.path().join("more/two.pcfg"), "a: x").unwrap();

        let paths = vec![dir.path().join("single.txt"), dir.path().join("more")];
        let result = discover_paths(&paths).unwrap();

        assert_eq!(result.scan.total(), 3);
        assert_eq!(result.root, dir.path());
    }
}
