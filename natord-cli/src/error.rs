//! Error handling for the CLI application

use std::fmt;

/// User-facing error categories
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Comparator could not be built
    ComparatorError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ComparatorError(msg) => write!(f, "Comparator error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<natord_core::Error> for CliError {
    fn from(error: natord_core::Error) -> Self {
        match error {
            natord_core::Error::Configuration(msg) => CliError::ConfigError(msg),
            unsupported @ natord_core::Error::UnsupportedLocale(_) => {
                CliError::ConfigError(unsupported.to_string())
            }
            other => CliError::ComparatorError(other.to_string()),
        }
    }
}
