//! Locale source management for CLI

use anyhow::{Context, Result};
use natord_core::{Config, ConfigBuilder, LocaleConfig};
use std::path::PathBuf;

/// Where the comparator's locale profile comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleSource {
    /// The system locale from the environment
    SystemDefault,
    /// Built-in locale by code or alias
    BuiltIn(String),
    /// External profile file
    External(PathBuf),
}

impl LocaleSource {
    /// Pick a source: external file, then explicit code, then system default
    pub fn resolve(locale_config: Option<&PathBuf>, locale: Option<&str>) -> Self {
        match (locale_config, locale) {
            (Some(path), _) => LocaleSource::External(path.clone()),
            (None, Some(code)) => LocaleSource::BuiltIn(code.to_string()),
            (None, None) => LocaleSource::SystemDefault,
        }
    }

    /// Get the display name for the locale source
    pub fn display_name(&self) -> String {
        match self {
            LocaleSource::SystemDefault => format!(
                "System default: {}",
                natord_core::locale::default_locale_code()
            ),
            LocaleSource::BuiltIn(code) => format!("Built-in: {code}"),
            LocaleSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Start a core configuration builder for this source
    pub fn config_builder(&self) -> Result<ConfigBuilder> {
        let builder = Config::builder();
        Ok(match self {
            LocaleSource::SystemDefault => builder,
            LocaleSource::BuiltIn(code) => builder.locale(code.as_str()),
            LocaleSource::External(path) => {
                let config = LocaleConfig::from_file(path).with_context(|| {
                    format!("Failed to load locale profile {}", path.display())
                })?;
                builder.locale_config(config)
            }
        })
    }
}
