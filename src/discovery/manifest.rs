//! Project manifest (pcfg.yaml) parsing.
//!
//! The manifest lists where grammars live and how strictly `pcfg check`
//! treats lint warnings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PcfgError, Result};

/// Project manifest loaded from pcfg.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for grammars.
    /// Defaults to current directory if empty.
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Treat lint warnings as errors.
    pub strict: bool,
}

impl Manifest {
    /// Load manifest from a pcfg.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PcfgError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| PcfgError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check pcfg.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.starts_with(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    /// Render the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| PcfgError::Config {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
sources:
  - grammars/
  - transforms/
excludes:
  - "*.bak"
  - "**/drafts/*"
strict: true
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.sources, vec!["grammars/", "transforms/"]);
        assert_eq!(manifest.excludes, vec!["*.bak", "**/drafts/*"]);
        assert!(manifest.strict);
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::default());
        assert!(!manifest.strict);
    }

    #[test]
    fn test_parse_invalid_manifest() {
        let result = Manifest::parse("sources: 12\nstrict: [");
        assert!(matches!(result, Err(PcfgError::Config { .. })));
    }

    #[test]
    fn test_effective_sources() {
        let mut manifest = Manifest::default();
        assert_eq!(manifest.effective_sources(), vec!["."]);

        manifest.sources = vec!["src/".to_string()];
        assert_eq!(manifest.effective_sources(), vec!["src/"]);
    }

    #[test]
    fn test_is_excluded_extension() {
        let manifest = Manifest {
            excludes: vec!["*.bak".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("names.pcfg.bak")));
        assert!(manifest.is_excluded(Path::new("path/to/file.bak")));
        assert!(!manifest.is_excluded(Path::new("names.pcfg")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("drafts/a.pcfg")));
        assert!(manifest.is_excluded(Path::new("grammars/drafts/b.pcfg")));
        assert!(!manifest.is_excluded(Path::new("grammars/c.pcfg")));
    }

    #[test]
    fn test_round_trip_yaml() {
        let manifest = Manifest {
            sources: vec!["grammars/".to_string()],
            excludes: vec![],
            strict: true,
        };
        let yaml = manifest.to_yaml().unwrap();
        assert_eq!(Manifest::parse(&yaml).unwrap(), manifest);
    }
}
