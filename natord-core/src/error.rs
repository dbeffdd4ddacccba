//! Error types for comparator construction
//!
//! Comparison and normalization never fail; errors only arise while
//! loading locale data or building a comparator.

use thiserror::Error;

/// Error type for natord operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (malformed locale profile, bad builder input)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No locale profile is registered under the requested code
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// The chunk pattern derived from a profile failed to compile
    #[error("Invalid chunk pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Locale file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for natord operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let error = Error::Configuration("minus_sign must be a single character".into());
        assert_eq!(
            error.to_string(),
            "Configuration error: minus_sign must be a single character"
        );
    }

    #[test]
    fn test_unsupported_locale_display() {
        let error = Error::UnsupportedLocale("xx-YY".into());
        assert_eq!(error.to_string(), "Unsupported locale: xx-YY");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("missing.toml"));
    }
}
