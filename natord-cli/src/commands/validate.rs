//! Validate command implementation

use anyhow::Result;
use clap::Args;
use natord_core::{Config, LocaleConfig, NaturalOrderComparator};
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to locale profile file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub locale_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating locale profile: {}",
            self.locale_config.display()
        );

        match Self::check(&self.locale_config) {
            Ok(config) => {
                println!("✓ Profile is valid!");
                println!("  Locale code: {}", config.metadata.code);
                println!("  Locale name: {}", config.metadata.name);
                if let Ok(profile) = config.profile() {
                    println!("  Numbers: {profile}");
                }
                println!("  Strength: {}", config.strength());
                Ok(())
            }
            Err(e) => {
                println!("✗ Profile is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {e}"))
            }
        }
    }

    /// Load the profile and build a comparator from it
    fn check(path: &Path) -> natord_core::Result<LocaleConfig> {
        let config = LocaleConfig::from_file(path)?;
        let built = Config::builder().locale_config(config.clone()).build()?;
        NaturalOrderComparator::with_config(&built)?;
        Ok(config)
    }
}
