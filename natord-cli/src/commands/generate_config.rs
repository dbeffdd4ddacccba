//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use natord_core::locale::{get_locale, FALLBACK_LOCALE};
use natord_core::NumericProfile;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Locale code for the new profile
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub locale_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating locale profile template...");
        println!("  Locale code: {}", self.locale_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Profile template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the numeric symbols for your locale");
        println!("2. Validate your profile:");
        println!(
            "   natord validate --locale-config {}",
            self.output.display()
        );
        println!("3. Use it for sorting:");
        println!(
            "   natord sort -i input.txt --locale-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template content, seeded from the closest embedded locale
    fn generate_template(&self) -> Result<String> {
        let base = get_locale(&self.locale_code)
            .or_else(|_| get_locale(FALLBACK_LOCALE))
            .context("No embedded locale to seed the template from")?;
        let profile = base.profile()?;
        log::debug!("Seeding template from '{}'", base.metadata.code);

        Ok(format!(
            r#"# Locale profile for {header}

[metadata]
code = {code}
name = "Custom Locale"
# Other codes that should resolve to this profile
aliases = []

# Numeric symbols, one character each. An empty string or a missing key
# means the symbol is not recognized at all.
[numbers]
minus_sign = "{minus}"
grouping_separator = "{grouping}"
decimal_separator = "{decimal}"

[collation]
# primary, secondary, tertiary or identical
strength = "{strength}"
"#,
            header = self.locale_code.escape_debug(),
            code = toml::Value::String(self.locale_code.clone()),
            minus = symbol(&profile, |p| p.minus_sign),
            grouping = symbol(&profile, |p| p.grouping_separator),
            decimal = symbol(&profile, |p| p.decimal_separator),
            strength = base.strength().name(),
        ))
    }
}

/// TOML escape for a profile symbol
fn symbol(profile: &NumericProfile, pick: impl Fn(&NumericProfile) -> Option<char>) -> String {
    match pick(profile) {
        None => String::new(),
        Some(ch) if ch.is_ascii_graphic() && ch != '"' && ch != '\\' => ch.to_string(),
        Some(ch) if u32::from(ch) > 0xFFFF => format!("\\U{:08X}", u32::from(ch)),
        Some(ch) => format!("\\u{:04X}", u32::from(ch)),
    }
}
