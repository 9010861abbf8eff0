//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Analyzer configuration
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Analyzer-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct AnalyzerConfig {
    /// Compiled dictionary path (plain or zstd-compressed)
    pub dictionary: Option<PathBuf>,

    /// Feature column the reading is taken from (IPADIC layout: 7)
    pub reading_field: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            dictionary: None,
            reading_field: yomigana_engine::DEFAULT_READING_FIELD,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> CliResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_ipadic_text() {
        let config = CliConfig::default();
        assert_eq!(config.analyzer.reading_field, 7);
        assert!(config.analyzer.dictionary.is_none());
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[analyzer]\ndictionary = \"system.dic.zst\"\nreading_field = 9"
        )
        .unwrap();
        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(
            config.analyzer.dictionary.as_deref(),
            Some(Path::new("system.dic.zst"))
        );
        assert_eq!(config.analyzer.reading_field, 9);
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "analyzer = 42").unwrap();
        assert!(CliConfig::load(file.path()).is_err());
    }
}
