//! Configuration API for comparators

use crate::collation::Strength;
use crate::error::{Error, Result};
use crate::locale::{self, LocaleConfig};

/// Where the numeric symbols and default strength come from
#[derive(Debug, Clone, Default)]
pub enum LocaleSource {
    /// The system locale, falling back to English
    #[default]
    SystemDefault,
    /// An embedded locale, by code or alias
    Code(String),
    /// A profile loaded from outside the crate
    External(Box<LocaleConfig>),
}

impl LocaleSource {
    /// Get the display name for the locale source
    pub fn display_name(&self) -> String {
        match self {
            LocaleSource::SystemDefault => {
                format!("System default ({})", locale::default_locale_code())
            }
            LocaleSource::Code(code) => format!("Built-in: {code}"),
            LocaleSource::External(config) => format!(
                "External: {} ({})",
                config.metadata.name, config.metadata.code
            ),
        }
    }
}

/// Comparator configuration
///
/// Symbol overrides are `Some(None)` to remove a symbol and `None` to keep
/// the locale's own.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) source: LocaleSource,
    pub(crate) strength: Option<Strength>,
    pub(crate) minus_sign: Option<Option<char>>,
    pub(crate) grouping_separator: Option<Option<char>>,
    pub(crate) decimal_separator: Option<Option<char>>,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Locale source
    pub fn source(&self) -> &LocaleSource {
        &self.source
    }

    /// Strength override, if any
    pub fn strength(&self) -> Option<Strength> {
        self.strength
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        let base = match &self.source {
            LocaleSource::SystemDefault => return Ok(()),
            LocaleSource::Code(code) => locale::get_locale(code)?.profile()?,
            LocaleSource::External(config) => {
                config.validate()?;
                config.profile()?
            }
        };

        let mut profile = base;
        if let Some(minus_sign) = self.minus_sign {
            profile = profile.with_minus_sign(minus_sign);
        }
        if let Some(grouping_separator) = self.grouping_separator {
            profile = profile.with_grouping_separator(grouping_separator);
        }
        if let Some(decimal_separator) = self.decimal_separator {
            profile = profile.with_decimal_separator(decimal_separator);
        }
        if profile.is_ambiguous() {
            log::warn!("Grouping and decimal separator coincide ({profile})");
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    locale: Option<String>,
    locale_config: Option<LocaleConfig>,
    strength: Option<Strength>,
    minus_sign: Option<Option<char>>,
    grouping_separator: Option<Option<char>>,
    decimal_separator: Option<Option<char>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an embedded locale by code or alias
    pub fn locale(mut self, code: impl Into<String>) -> Self {
        self.locale = Some(code.into());
        self
    }

    /// Use an external locale profile
    pub fn locale_config(mut self, config: LocaleConfig) -> Self {
        self.locale_config = Some(config);
        self
    }

    /// Override the locale's collation strength
    pub fn strength(mut self, strength: Strength) -> Self {
        self.strength = Some(strength);
        self
    }

    /// Override the minus sign (`None` removes it)
    pub fn minus_sign(mut self, minus_sign: Option<char>) -> Self {
        self.minus_sign = Some(minus_sign);
        self
    }

    /// Override the grouping separator (`None` removes it)
    pub fn grouping_separator(mut self, grouping_separator: Option<char>) -> Self {
        self.grouping_separator = Some(grouping_separator);
        self
    }

    /// Override the decimal separator (`None` removes it)
    pub fn decimal_separator(mut self, decimal_separator: Option<char>) -> Self {
        self.decimal_separator = Some(decimal_separator);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let source = match (self.locale, self.locale_config) {
            (Some(code), None) => LocaleSource::Code(code),
            (None, Some(config)) => LocaleSource::External(Box::new(config)),
            (None, None) => LocaleSource::SystemDefault,
            (Some(code), Some(config)) => {
                return Err(Error::Configuration(format!(
                    "both locale '{code}' and external profile '{}' were given",
                    config.metadata.code
                )))
            }
        };

        let config = Config {
            source,
            strength: self.strength,
            minus_sign: self.minus_sign,
            grouping_separator: self.grouping_separator,
            decimal_separator: self.decimal_separator,
        };
        config.validate()?;
        Ok(config)
    }
}
