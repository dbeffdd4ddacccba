//! Configuration structures and validation
//!
//! This module defines the TOML schema for locale profiles.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::collation::Strength;
use crate::error::{Error, Result};
use crate::locale::profile::NumericProfile;

/// Root locale configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub numbers: Numbers,
    #[serde(default)]
    pub collation: Collation,
}

/// Locale metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    /// Alternative codes and names resolving to this locale
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Numeric symbols; a missing or empty entry means the symbol is absent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Numbers {
    #[serde(default)]
    pub minus_sign: Option<String>,
    #[serde(default)]
    pub grouping_separator: Option<String>,
    #[serde(default)]
    pub decimal_separator: Option<String>,
}

/// Collation defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collation {
    #[serde(default)]
    pub strength: Strength,
}

impl LocaleConfig {
    /// Parse a profile from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LocaleConfig = toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse locale config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a profile from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("Loading locale config from {}", path.display());
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Configuration(msg) => {
                Error::Configuration(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(Error::Configuration("Locale code must not be empty".into()));
        }

        let profile = self.profile()?;
        if profile.is_ambiguous() {
            // Soft edge: numbers become ambiguous but comparison still works
            log::warn!(
                "Locale '{}' uses the same grouping and decimal separator",
                self.metadata.code
            );
        }

        Ok(())
    }

    /// Numeric symbols of this locale
    pub fn profile(&self) -> Result<NumericProfile> {
        Ok(NumericProfile::new(
            parse_symbol("minus_sign", self.numbers.minus_sign.as_deref())?,
            parse_symbol("grouping_separator", self.numbers.grouping_separator.as_deref())?,
            parse_symbol("decimal_separator", self.numbers.decimal_separator.as_deref())?,
        ))
    }

    /// Default collation strength of this locale
    pub fn strength(&self) -> Strength {
        self.collation.strength
    }
}

fn parse_symbol(field: &str, value: Option<&str>) -> Result<Option<char>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(ch), None) => Ok(Some(ch)),
        (Some(_), Some(_)) => Err(Error::Configuration(format!(
            "{field} must be a single character, got {value:?}"
        ))),
    }
}
