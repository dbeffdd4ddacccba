//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one sorted line
    ///
    /// `line_number` is the 1-based position of the line in its input.
    fn format_line(&mut self, line: &str, line_number: usize, key: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per input line
    #[default]
    Text,
    /// JSON array of lines with their normalized keys
    Json,
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
