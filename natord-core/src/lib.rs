//! Locale-aware natural order comparison
//!
//! Strings are compared the way people read them: runs of digits are
//! numbers, so `"item 2"` sorts before `"item 11"`, and the text between
//! numbers is compared with a locale collator. Numbers follow the locale's
//! minus sign, grouping separator and decimal separator, so `"1.234,5"`
//! under German rules equals `"1,234.5"` under English rules.
//!
//! # Architecture
//!
//! - **locale**: embedded TOML profiles with numeric symbols and defaults
//! - **pattern**: the chunk regex compiled from a numeric profile
//! - **number**: exact decimal values for numeric chunks
//! - **collation**: the text collator capability and its folding default
//! - **comparator**: comparison, normalization and sorting
//!
//! # Example
//!
//! ```rust
//! use natord_core::NaturalOrderComparator;
//! use std::cmp::Ordering;
//!
//! let comparator = NaturalOrderComparator::for_locale("en").unwrap();
//!
//! assert_eq!(comparator.compare("item 2", "item 11"), Ordering::Less);
//! assert_eq!(comparator.compare("item 1,000", "ITEM 1000"), Ordering::Equal);
//!
//! let mut files = vec!["page 10", "page 9", "page 100"];
//! comparator.sort(&mut files);
//! assert_eq!(files, vec!["page 9", "page 10", "page 100"]);
//!
//! assert_eq!(comparator.normalize("Page  1,000.50"), "page 1000.5");
//! ```

pub mod api;
pub mod collation;
pub mod comparator;
pub mod error;
pub mod locale;
pub mod number;
pub mod pattern;
pub mod text;

pub use api::{Config, ConfigBuilder, LocaleSource};
pub use collation::{FoldingCollator, Strength, TextCollator};
pub use comparator::NaturalOrderComparator;
pub use error::{Error, Result};
pub use locale::{LocaleConfig, NumericProfile};
pub use number::{Decimal, ParseDecimalError};
pub use pattern::{ChunkPattern, Segment};

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_crate_exports() {
        let config = Config::builder().locale("fr").build().unwrap();
        let comparator = NaturalOrderComparator::with_config(&config).unwrap();
        assert_eq!(
            comparator.compare("prix 1\u{202F}000,5", "prix 1000,5"),
            Ordering::Equal
        );
        assert_eq!(comparator.profile().decimal_separator, Some(','));
    }

    #[test]
    fn test_comparators_across_locales_agree_on_values() {
        let en = NaturalOrderComparator::for_locale("en").unwrap();
        let de = NaturalOrderComparator::for_locale("de").unwrap();
        assert_eq!(en.normalize("x 1,234.5"), de.normalize("x 1.234,5"));
    }
}
