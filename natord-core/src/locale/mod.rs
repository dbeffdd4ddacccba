//! Locale data for natural ordering
//!
//! Numeric symbols and collation defaults come from TOML profiles. A set
//! of profiles is embedded in the crate; external files use the same
//! schema.

pub mod config;
pub mod loader;
mod profile;

pub use config::LocaleConfig;
pub use loader::{
    available_locales, default_locale, default_locale_code, get_locale, list_available_locales,
    locale_code_from_posix, FALLBACK_LOCALE,
};
pub use profile::NumericProfile;
