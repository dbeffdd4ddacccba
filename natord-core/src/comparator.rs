//! Natural order comparison and normalization
//!
//! Strings are walked chunk by chunk: the text before each number is
//! collated, then the numbers are compared by value. Whatever follows the
//! last common chunk is collated as plain text. Whitespace runs collapse to
//! a single space and are ignored at the edges of every text part.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::api::{Config, LocaleSource};
use crate::collation::{FoldingCollator, TextCollator};
use crate::error::Result;
use crate::locale::{self, LocaleConfig, NumericProfile};
use crate::number::Decimal;
use crate::pattern::ChunkPattern;
use crate::text::collapse_whitespace;

/// Separates parts of a lookup key
const KEY_SEPARATOR: u8 = 0x00;

/// Locale-aware natural order comparator
///
/// Cheap to clone and safe to share between threads; comparing never
/// mutates anything.
#[derive(Clone)]
pub struct NaturalOrderComparator {
    pattern: ChunkPattern,
    collator: Arc<dyn TextCollator>,
}

impl NaturalOrderComparator {
    /// Create a comparator for the system default locale
    pub fn new() -> Self {
        locale::default_locale()
            .and_then(Self::from_locale_config)
            .or_else(|e| {
                log::warn!("Default locale unusable ({e}); using built-in English symbols");
                Self::with_profile(
                    NumericProfile::english(),
                    Arc::new(FoldingCollator::default()),
                )
            })
            .expect("English profile always compiles")
    }

    /// Create a comparator for an embedded locale
    pub fn for_locale(code: &str) -> Result<Self> {
        Self::from_locale_config(locale::get_locale(code)?)
    }

    /// Create a comparator from a locale profile and its default strength
    pub fn from_locale_config(config: &LocaleConfig) -> Result<Self> {
        let collator = FoldingCollator::new(config.strength());
        Self::with_profile(config.profile()?, Arc::new(collator))
    }

    /// Create a comparator from explicit numeric symbols and a collator
    pub fn with_profile(profile: NumericProfile, collator: Arc<dyn TextCollator>) -> Result<Self> {
        let pattern = ChunkPattern::new(profile)?;
        log::debug!("Created comparator ({profile}, {collator:?})");
        Ok(Self { pattern, collator })
    }

    /// Create a comparator from a built configuration
    pub fn with_config(config: &Config) -> Result<Self> {
        let locale_config = match &config.source {
            LocaleSource::SystemDefault => locale::default_locale()?,
            LocaleSource::Code(code) => locale::get_locale(code)?,
            LocaleSource::External(config) => config.as_ref(),
        };

        let mut profile = locale_config.profile()?;
        if let Some(minus_sign) = config.minus_sign {
            profile = profile.with_minus_sign(minus_sign);
        }
        if let Some(grouping_separator) = config.grouping_separator {
            profile = profile.with_grouping_separator(grouping_separator);
        }
        if let Some(decimal_separator) = config.decimal_separator {
            profile = profile.with_decimal_separator(decimal_separator);
        }

        let strength = config.strength.unwrap_or_else(|| locale_config.strength());
        Self::with_profile(profile, Arc::new(FoldingCollator::new(strength)))
    }

    /// Numeric symbols in use
    pub fn profile(&self) -> &NumericProfile {
        self.pattern.profile()
    }

    /// Collator in use
    pub fn collator(&self) -> &dyn TextCollator {
        self.collator.as_ref()
    }

    /// Compare two strings in natural order
    pub fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
        let mut lhs_end = 0;
        let mut rhs_end = 0;

        while let (Some(lhs_chunk), Some(rhs_chunk)) = (
            self.pattern.find_at(lhs, lhs_end),
            self.pattern.find_at(rhs, rhs_end),
        ) {
            // Text before a number outranks the number itself
            let ordering = self
                .compare_text(lhs_chunk.text, rhs_chunk.text)
                .then_with(|| self.compare_numbers(lhs_chunk.number, rhs_chunk.number));
            if ordering != Ordering::Equal {
                return ordering;
            }

            lhs_end = lhs_chunk.end;
            rhs_end = rhs_chunk.end;
        }

        self.compare_text(&lhs[lhs_end..], &rhs[rhs_end..])
    }

    /// Display-style canonical form of a string
    ///
    /// Text parts are folded by the collator and numbers are written in a
    /// locale-neutral form, joined by single spaces. Strings that compare
    /// equal always normalize equally.
    pub fn normalize(&self, text: &str) -> String {
        let mut parts: Vec<String> = Vec::new();
        let mut segments = self.pattern.segments(text);

        for segment in segments.by_ref() {
            let prefix = self.fold_text(segment.text);
            if !prefix.is_empty() {
                parts.push(prefix);
            }
            parts.push(match self.canonical_number(segment.number) {
                CanonicalNumber::Parsed(value) => value.to_string(),
                CanonicalNumber::Raw(raw) => self.collator.canonical_form(&raw).into_owned(),
            });
        }

        let suffix = self.fold_text(segments.remainder());
        if !suffix.is_empty() {
            parts.push(suffix);
        }
        parts.join(" ")
    }

    /// Opaque byte key for equality lookups
    ///
    /// Built from collation keys of the text parts and canonical numbers.
    /// Strings that compare equal always produce equal keys. The key does
    /// not preserve ordering.
    pub fn normalize_for_lookup(&self, text: &str) -> Vec<u8> {
        let mut key = Vec::with_capacity(text.len());
        let mut segments = self.pattern.segments(text);

        for segment in segments.by_ref() {
            key.extend(self.collator.collation_key(&collapse_whitespace(segment.text)));
            key.push(KEY_SEPARATOR);
            match self.canonical_number(segment.number) {
                CanonicalNumber::Parsed(value) => key.extend(value.to_string().into_bytes()),
                CanonicalNumber::Raw(raw) => key.extend(self.collator.collation_key(&raw)),
            }
            key.push(KEY_SEPARATOR);
        }

        key.extend(
            self.collator
                .collation_key(&collapse_whitespace(segments.remainder())),
        );
        key
    }

    /// Hash of [`normalize_for_lookup`](Self::normalize_for_lookup)
    pub fn lookup_hash(&self, text: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.normalize_for_lookup(text).hash(&mut hasher);
        hasher.finish()
    }

    /// Stable sort in natural order
    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        items.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    /// Stable parallel sort in natural order
    #[cfg(feature = "parallel")]
    pub fn par_sort<S: AsRef<str> + Send>(&self, items: &mut [S]) {
        use rayon::slice::ParallelSliceMut;

        items.par_sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    /// Drop consecutive items that compare equal, keeping the first
    pub fn dedup_sorted<S: AsRef<str>>(&self, items: &mut Vec<S>) {
        items.dedup_by(|a, b| self.compare(a.as_ref(), b.as_ref()) == Ordering::Equal);
    }

    fn compare_text(&self, lhs: &str, rhs: &str) -> Ordering {
        self.collator
            .compare(&collapse_whitespace(lhs), &collapse_whitespace(rhs))
    }

    fn compare_numbers(&self, lhs: &str, rhs: &str) -> Ordering {
        let lhs = self.pattern.canonicalize_number(lhs);
        let rhs = self.pattern.canonicalize_number(rhs);
        match (Decimal::parse(&lhs), Decimal::parse(&rhs)) {
            (Ok(lhs), Ok(rhs)) => lhs.cmp(&rhs),
            (lhs_result, rhs_result) => {
                log::trace!(
                    "Comparing numbers {lhs:?} and {rhs:?} as text: {:?} / {:?}",
                    lhs_result.err(),
                    rhs_result.err()
                );
                self.collator.compare(&lhs, &rhs)
            }
        }
    }

    fn fold_text(&self, text: &str) -> String {
        self.collator
            .canonical_form(&collapse_whitespace(text))
            .into_owned()
    }

    fn canonical_number(&self, number: &str) -> CanonicalNumber {
        let canonical = self.pattern.canonicalize_number(number);
        match Decimal::parse(&canonical) {
            Ok(value) => CanonicalNumber::Parsed(value),
            Err(e) => {
                log::trace!("Comparing {number:?} as text: {e}");
                CanonicalNumber::Raw(canonical.into_owned())
            }
        }
    }
}

impl Default for NaturalOrderComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NaturalOrderComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaturalOrderComparator")
            .field("profile", self.profile())
            .field("collator", &self.collator)
            .finish()
    }
}

/// A number chunk after locale symbols were rewritten
enum CanonicalNumber {
    Parsed(Decimal),
    /// Did not parse; handled as text
    Raw(String),
}
