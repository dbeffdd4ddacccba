//! Compare command implementation

use anyhow::Result;
use clap::Args;
use std::cmp::Ordering;

use super::ComparatorArgs;

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Left-hand string
    pub lhs: String,

    /// Right-hand string
    pub rhs: String,

    #[command(flatten)]
    pub comparison: ComparatorArgs,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.run()?);
        Ok(())
    }

    /// Compare the two strings as `-1`, `0` or `1`
    pub fn run(&self) -> Result<i8> {
        let file_config = self.comparison.load_config()?;
        let comparator = self.comparison.comparator(&file_config)?;

        Ok(match comparator.compare(&self.lhs, &self.rhs) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }
}
