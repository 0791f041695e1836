//! Configuration type definitions.
//!
//! These types are pure data - no I/O or complex logic.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Settings for a pagesmith project, usually read from `pagesmith.yaml`.
///
/// ```yaml
/// input: product.yaml
/// output: outputs
/// pretty: true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Raw product record to read (`.json`, `.yaml` or `.yml`)
    pub input: PathBuf,

    /// Directory the page documents are written to
    pub output: PathBuf,

    /// Pretty-print output JSON with two-space indentation
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("product.yaml"),
            output: PathBuf::from("outputs"),
            pretty: true,
        }
    }
}

impl Settings {
    /// Resolve relative `input` and `output` paths against a base path.
    pub fn resolve_paths(mut self, base_path: &Path) -> Self {
        if self.input.is_relative() {
            self.input = base_path.join(&self.input);
        }
        if self.output.is_relative() {
            self.output = base_path.join(&self.output);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.input, PathBuf::from("product.yaml"));
        assert_eq!(settings.output, PathBuf::from("outputs"));
        assert!(settings.pretty);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("output: dist\n").unwrap();
        assert_eq!(settings.output, PathBuf::from("dist"));
        assert_eq!(settings.input, PathBuf::from("product.yaml"));
    }

    #[test]
    fn test_resolve_paths() {
        let settings = Settings {
            input: PathBuf::from("data/product.json"),
            output: PathBuf::from("/abs/out"),
            pretty: false,
        }
        .resolve_paths(Path::new("/project"));

        assert_eq!(settings.input, PathBuf::from("/project/data/product.json"));
        assert_eq!(settings.output, PathBuf::from("/abs/out"));
    }
}
