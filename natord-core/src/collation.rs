//! Text collation capability
//!
//! The comparator never inspects text itself; it delegates to a
//! [`TextCollator`]. [`FoldingCollator`] is the bundled implementation: a
//! level-by-level comparison over Unicode canonical decomposition, with
//! strength selecting how many levels take part.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::{is_nfd, UnicodeNormalization};

use crate::error::Error;

/// Collation strength, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Base letters only: ignores case and accents
    Primary,
    /// Base letters and accents: ignores case
    #[default]
    Secondary,
    /// Base letters, accents and case
    Tertiary,
    /// Code point identity
    Identical,
}

impl Strength {
    /// All strengths, weakest first
    pub const ALL: [Strength; 4] = [
        Strength::Primary,
        Strength::Secondary,
        Strength::Tertiary,
        Strength::Identical,
    ];

    /// Lowercase name as used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            Strength::Primary => "primary",
            Strength::Secondary => "secondary",
            Strength::Tertiary => "tertiary",
            Strength::Identical => "identical",
        }
    }

    /// Whether strings differing only in letter case compare equal
    pub fn is_case_insensitive(&self) -> bool {
        *self <= Strength::Secondary
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "primary" => Ok(Strength::Primary),
            "secondary" => Ok(Strength::Secondary),
            "tertiary" => Ok(Strength::Tertiary),
            "identical" | "exact" => Ok(Strength::Identical),
            other => Err(Error::Configuration(format!(
                "unknown collation strength '{other}' (expected primary, secondary, tertiary or identical)"
            ))),
        }
    }
}

/// Locale-aware string comparison with canonical keys
///
/// Implementations must keep three operations consistent:
/// `compare(a, b) == Equal` exactly when `canonical_form(a) ==
/// canonical_form(b)`, and `collation_key` must be equal whenever the
/// canonical forms are. The comparator's normalization guarantees rest on
/// this.
pub trait TextCollator: Send + Sync + fmt::Debug {
    /// Order two strings
    fn compare(&self, lhs: &str, rhs: &str) -> Ordering;

    /// Canonical string for equality under this collator
    fn canonical_form<'a>(&self, text: &'a str) -> Cow<'a, str>;

    /// Opaque equality key bytes
    fn collation_key(&self, text: &str) -> Vec<u8> {
        self.canonical_form(text).into_owned().into_bytes()
    }
}

/// Strength-configurable collator built on canonical decomposition
///
/// Levels are compared in order: primary (lowercase, combining marks
/// dropped), secondary (lowercase, marks kept), tertiary (decomposed text)
/// and identical (raw text). Each level's folded form is a function of the
/// next stronger one, so equality at a strength implies equality at every
/// weaker strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FoldingCollator {
    strength: Strength,
}

impl FoldingCollator {
    /// Create a collator with the given strength
    pub fn new(strength: Strength) -> Self {
        Self { strength }
    }

    /// Configured strength
    pub fn strength(&self) -> Strength {
        self.strength
    }

    fn fold<'a>(text: &'a str, level: Strength) -> Cow<'a, str> {
        match level {
            Strength::Identical => Cow::Borrowed(text),
            Strength::Tertiary => {
                if is_nfd(text) {
                    Cow::Borrowed(text)
                } else {
                    Cow::Owned(text.nfd().collect())
                }
            }
            Strength::Secondary => Cow::Owned(text.nfd().flat_map(char::to_lowercase).collect()),
            Strength::Primary => Cow::Owned(
                text.nfd()
                    .flat_map(char::to_lowercase)
                    .filter(|ch| !is_combining_mark(*ch))
                    .collect(),
            ),
        }
    }
}

impl TextCollator for FoldingCollator {
    fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
        if lhs == rhs {
            return Ordering::Equal;
        }

        for level in Strength::ALL.into_iter().filter(|l| *l <= self.strength) {
            let ordering = Self::fold(lhs, level).cmp(&Self::fold(rhs, level));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    fn canonical_form<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Self::fold(text, self.strength)
    }
}
