//! Arbitrary-precision decimal values for numeric chunk comparison
//!
//! Numbers arrive here already canonicalized by the chunk pattern: an
//! optional leading `-`, digits, and at most one `.` followed by digits.
//! Digits may come from any Unicode decimal digit block; they are mapped
//! to their ASCII value while parsing.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::text::is_decimal_digit;

/// Decimal value of a Unicode decimal digit
///
/// Every `Nd` block is a run of ten contiguous code points starting at its
/// zero, and adjacent blocks stay aligned, so the value is the distance to
/// the start of the run modulo ten.
pub fn digit_value(ch: char) -> Option<u8> {
    if ch.is_ascii_digit() {
        return Some(ch as u8 - b'0');
    }
    if !is_decimal_digit(ch) {
        return None;
    }

    let cp = ch as u32;
    let mut start = cp;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some(((cp - start) % 10) as u8)
}

/// Reasons a canonical number string can fail to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDecimalError {
    /// Input was empty or only a sign
    #[error("number has no digits")]
    Empty,

    /// A character that is neither a known digit nor canonical punctuation
    #[error("unexpected character {ch:?} at byte {position}")]
    UnexpectedChar {
        /// The offending character
        ch: char,
        /// Byte offset of the character in the input
        position: usize,
    },

    /// A decimal point without fraction digits
    #[error("decimal point is not followed by digits")]
    MissingFraction,
}

/// An exact decimal number of unbounded size
///
/// Stored as ASCII digit strings with leading integer zeros and trailing
/// fraction zeros removed, so equal values have equal representations.
/// Zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    negative: bool,
    integer: String,
    fraction: String,
}

impl Decimal {
    /// Parse a canonical number string (`-`, digits, `.`)
    pub fn parse(text: &str) -> Result<Self, ParseDecimalError> {
        let mut chars = text.char_indices().peekable();

        let negative = matches!(chars.peek(), Some((_, '-')));
        if negative {
            chars.next();
        }

        let mut integer = String::new();
        let mut fraction = String::new();
        let mut seen_point = false;
        let mut seen_digit = false;

        for (position, ch) in chars {
            if ch == '.' && !seen_point {
                if !seen_digit {
                    return Err(ParseDecimalError::UnexpectedChar { ch, position });
                }
                seen_point = true;
                continue;
            }

            let Some(value) = digit_value(ch) else {
                return Err(ParseDecimalError::UnexpectedChar { ch, position });
            };

            let digit = char::from(b'0' + value);
            if seen_point {
                fraction.push(digit);
            } else {
                seen_digit = true;
                // Skip leading zeros
                if !(integer.is_empty() && digit == '0') {
                    integer.push(digit);
                }
            }
        }

        if !seen_digit {
            return Err(ParseDecimalError::Empty);
        }
        if seen_point && fraction.is_empty() {
            return Err(ParseDecimalError::MissingFraction);
        }

        fraction.truncate(fraction.trim_end_matches('0').len());

        let is_zero = integer.is_empty() && fraction.is_empty();
        Ok(Self {
            negative: negative && !is_zero,
            integer,
            fraction,
        })
    }

    /// Whether the value is zero
    pub fn is_zero(&self) -> bool {
        self.integer.is_empty() && self.fraction.is_empty()
    }

    /// Whether the value is strictly negative
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.integer
            .len()
            .cmp(&other.integer.len())
            .then_with(|| self.integer.cmp(&other.integer))
            .then_with(|| self.fraction.cmp(&other.fraction))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the canonical locale-neutral form, e.g. `-1000.5`
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        if self.integer.is_empty() {
            f.write_str("0")?;
        } else {
            f.write_str(&self.integer)?;
        }
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}
