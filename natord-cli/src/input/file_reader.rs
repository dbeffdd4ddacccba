//! Line reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Reads UTF-8 text as lines
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all lines of a file, without line terminators
    pub fn read_lines(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Read all lines from a reader such as stdin
    pub fn read_lines_from<R: BufRead>(reader: R) -> Result<Vec<String>> {
        reader
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read input lines")
    }
}
