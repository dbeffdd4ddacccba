//! List command implementation

use anyhow::Result;
use natord_core::locale::available_locales;
use natord_core::Strength;

use super::ListCommands;

/// Execute a list subcommand
pub fn execute(subcommand: &ListCommands) -> Result<()> {
    let lines = match subcommand {
        ListCommands::Locales => {
            println!("Available locales:");
            locale_lines()?
        }
        ListCommands::Strengths => {
            println!("Available collation strengths:");
            strength_lines()
        }
    };

    for line in lines {
        println!("  {line}");
    }
    Ok(())
}

fn locale_lines() -> Result<Vec<String>> {
    available_locales()
        .into_iter()
        .map(|config| -> Result<String> {
            let profile = config.profile()?;
            Ok(format!(
                "{:<6} {:<10} {profile}",
                config.metadata.code, config.metadata.name
            ))
        })
        .collect()
}

fn strength_lines() -> Vec<String> {
    Strength::ALL
        .iter()
        .map(|strength| {
            let description = match strength {
                Strength::Primary => "ignores case and accents",
                Strength::Secondary => "ignores case (default)",
                Strength::Tertiary => "case and accent sensitive",
                Strength::Identical => "exact code point comparison",
            };
            format!("{:<10} {description}", strength.name())
        })
        .collect()
}
