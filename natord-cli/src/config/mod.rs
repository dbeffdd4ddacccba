//! Configuration file support
//!
//! Values from the file fill in whatever the command line leaves unset.

use anyhow::Result;
use natord_core::Strength;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Comparison configuration
    #[serde(default)]
    pub comparison: ComparisonConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Comparison-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ComparisonConfig {
    /// Locale code or alias
    pub locale: Option<String>,

    /// Collation strength
    pub strength: Option<Strength>,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.comparison.locale, None);
        assert_eq!(config.comparison.strength, None);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::from_toml_str(
            r#"
[comparison]
locale = "de"
strength = "tertiary"

[output]
format = "json"
pretty_json = false
"#,
        )
        .unwrap();

        assert_eq!(config.comparison.locale.as_deref(), Some("de"));
        assert_eq!(config.comparison.strength, Some(Strength::Tertiary));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_partial_config() {
        let config = CliConfig::from_toml_str("[comparison]\nlocale = \"fr\"\n").unwrap();
        assert_eq!(config.comparison.locale.as_deref(), Some("fr"));
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_rejects_unknown_keys_and_values() {
        assert!(CliConfig::from_toml_str("[comparison]\nlanguage = \"de\"\n").is_err());
        assert!(CliConfig::from_toml_str("[comparison]\nstrength = \"loud\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"\npretty_json = true").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_missing_file() {
        let error = CliConfig::load(Path::new("/nonexistent/natord.toml")).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }
}
