//! Normalize command implementation

use anyhow::Result;
use clap::Args;
use std::fmt::Write;

use super::ComparatorArgs;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Texts to normalize
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Print the lookup key as hex bytes instead of the display form
    #[arg(long)]
    pub bytes: bool,

    #[command(flatten)]
    pub comparison: ComparatorArgs,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> Result<()> {
        for line in self.run()? {
            println!("{line}");
        }
        Ok(())
    }

    /// Normal form of each text, one entry per input
    pub fn run(&self) -> Result<Vec<String>> {
        let file_config = self.comparison.load_config()?;
        let comparator = self.comparison.comparator(&file_config)?;

        Ok(self
            .text
            .iter()
            .map(|text| {
                if self.bytes {
                    to_hex(&comparator.normalize_for_lookup(text))
                } else {
                    comparator.normalize(text)
                }
            })
            .collect())
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, byte| {
        let _ = write!(out, "{byte:02x}");
        out
    })
}
