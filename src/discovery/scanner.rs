//! File system scanner for discovering grammar files.
//!
//! Recursively scans directories to find all `.pcfg` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// File extension of grammar files.
pub const GRAMMAR_EXTENSION: &str = "pcfg";

/// Result of scanning for grammar files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered grammar files, sorted per scanned directory.
    pub grammars: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.grammars.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }

    /// Merge another scan result into this one, skipping duplicates.
    pub fn merge(&mut self, other: ScanResult) {
        for path in other.grammars {
            if !self.grammars.contains(&path) {
                self.grammars.push(path);
            }
        }
    }
}

/// Scan a directory for grammar files.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || manifest.is_excluded(path) {
            continue;
        }

        if is_grammar_file(path) {
            result.grammars.push(path.to_path_buf());
        }
    }

    result
}

/// Scan multiple source paths relative to `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}

/// Whether a path names a grammar file.
pub fn is_grammar_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(GRAMMAR_EXTENSION)
}
