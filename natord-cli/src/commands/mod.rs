//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use natord_core::{NaturalOrderComparator, Strength};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::locale_source::LocaleSource;

pub mod compare;
pub mod generate_config;
pub mod list;
pub mod normalize;
pub mod sort;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sort lines in natural order
    Sort(sort::SortArgs),

    /// Compare two strings, printing -1, 0 or 1
    Compare(compare::CompareArgs),

    /// Print the normal form of each text
    Normalize(normalize::NormalizeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a locale profile file
    Validate(validate::ValidateArgs),

    /// Generate a locale profile template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Sort(args) => args.execute(),
            Commands::Compare(args) => args.execute(),
            Commands::Normalize(args) => args.execute(),
            Commands::List { subcommand } => list::execute(subcommand),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List embedded locales and their numeric symbols
    Locales,

    /// List collation strengths
    Strengths,
}

/// Options shared by every command that builds a comparator
#[derive(Debug, Clone, Default, Args)]
pub struct ComparatorArgs {
    /// Locale code or alias (default: system locale)
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// External locale profile (TOML)
    #[arg(long, value_name = "FILE", conflicts_with = "locale")]
    pub locale_config: Option<PathBuf>,

    /// Collation strength: primary, secondary, tertiary or identical
    #[arg(short, long, value_name = "STRENGTH")]
    pub strength: Option<Strength>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ComparatorArgs {
    /// Load the configuration file, or defaults when none was given
    pub fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => CliConfig::load(path),
            None => Ok(CliConfig::default()),
        }
    }

    /// Build a comparator; arguments override the configuration file
    pub fn comparator(&self, file_config: &CliConfig) -> Result<NaturalOrderComparator> {
        let locale = self
            .locale
            .as_deref()
            .or(file_config.comparison.locale.as_deref());
        let source = LocaleSource::resolve(self.locale_config.as_ref(), locale);
        log::info!("Locale: {}", source.display_name());

        let mut builder = source.config_builder()?;
        if let Some(strength) = self.strength.or(file_config.comparison.strength) {
            log::info!("Strength: {strength}");
            builder = builder.strength(strength);
        }

        let config = builder.build().map_err(CliError::from)?;
        let comparator = NaturalOrderComparator::with_config(&config).map_err(CliError::from)?;
        log::debug!("Comparator: {comparator:?}");
        Ok(comparator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Locales,
        };
        let debug_str = format!("{list_cmd:?}");
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Locales"));
    }

    #[test]
    fn test_arguments_override_config_file() {
        let file_config = CliConfig::from_toml_str(
            "[comparison]\nlocale = \"en\"\nstrength = \"identical\"\n",
        )
        .unwrap();
        let args = ComparatorArgs {
            locale: Some("de".to_string()),
            ..Default::default()
        };

        let comparator = args.comparator(&file_config).unwrap();
        assert_eq!(comparator.profile().decimal_separator, Some(','));
        // Strength still comes from the file
        assert_ne!(comparator.compare("A 1", "a 1"), Ordering::Equal);
    }

    #[test]
    fn test_config_file_locale() {
        let file_config = CliConfig::from_toml_str("[comparison]\nlocale = \"fr\"\n").unwrap();
        let comparator = ComparatorArgs::default().comparator(&file_config).unwrap();
        assert_eq!(comparator.profile().grouping_separator, Some('\u{202F}'));
    }

    #[test]
    fn test_unknown_locale_is_config_error() {
        let args = ComparatorArgs {
            locale: Some("xx".to_string()),
            ..Default::default()
        };
        let error = args.comparator(&CliConfig::default()).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }
}
