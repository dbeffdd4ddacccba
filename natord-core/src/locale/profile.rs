//! Locale numeric symbols

use std::fmt;

/// The numeric symbols of a locale
///
/// Any symbol may be absent, in which case the chunk pattern does not
/// recognize that part of a number at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericProfile {
    /// Minus sign, e.g. `-` or U+2212
    pub minus_sign: Option<char>,
    /// Digit grouping separator, e.g. `,` or U+00A0
    pub grouping_separator: Option<char>,
    /// Decimal separator, e.g. `.` or `,`
    pub decimal_separator: Option<char>,
}

impl NumericProfile {
    /// Create a profile from explicit symbols
    pub const fn new(
        minus_sign: Option<char>,
        grouping_separator: Option<char>,
        decimal_separator: Option<char>,
    ) -> Self {
        Self {
            minus_sign,
            grouping_separator,
            decimal_separator,
        }
    }

    /// `-`, `,` and `.` as used by English
    pub const fn english() -> Self {
        Self::new(Some('-'), Some(','), Some('.'))
    }

    /// Replace the minus sign
    pub fn with_minus_sign(mut self, minus_sign: Option<char>) -> Self {
        self.minus_sign = minus_sign;
        self
    }

    /// Replace the grouping separator
    pub fn with_grouping_separator(mut self, grouping_separator: Option<char>) -> Self {
        self.grouping_separator = grouping_separator;
        self
    }

    /// Replace the decimal separator
    pub fn with_decimal_separator(mut self, decimal_separator: Option<char>) -> Self {
        self.decimal_separator = decimal_separator;
        self
    }

    /// Grouping and decimal separators are the same character
    ///
    /// Such a profile still works but numbers become ambiguous.
    pub fn is_ambiguous(&self) -> bool {
        self.grouping_separator.is_some() && self.grouping_separator == self.decimal_separator
    }
}

impl Default for NumericProfile {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for NumericProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn symbol(ch: Option<char>) -> String {
            match ch {
                Some(ch) if ch.is_ascii_graphic() => format!("'{ch}'"),
                Some(ch) => format!("U+{:04X}", ch as u32),
                None => "none".to_string(),
            }
        }

        write!(
            f,
            "minus {}, grouping {}, decimal {}",
            symbol(self.minus_sign),
            symbol(self.grouping_separator),
            symbol(self.decimal_separator)
        )
    }
}
