//! natord CLI library
//!
//! This library provides the command-line interface for locale-aware
//! natural order sorting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod locale_source;
pub mod output;

pub use error::CliError;

/// Initialize logging based on verbosity level
///
/// `quiet` disables logging entirely. `RUST_LOG` still overrides the level.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run inside tests
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
