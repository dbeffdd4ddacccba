//! Chunk segmentation
//!
//! A [`ChunkPattern`] splits text into `(text, number)` segments followed
//! by a trailing remainder. It is compiled once from a [`NumericProfile`]
//! and shared freely: `Regex` keeps its match scratch space per thread.

use std::borrow::Cow;

use regex::Regex;

use crate::error::Result;
use crate::locale::NumericProfile;
use crate::text::is_dash;

/// Unicode decimal digit
const DIGIT: &str = r"\p{Nd}";
/// Unicode whitespace
const WHITESPACE: &str = r"\s";
/// Any dash punctuation, plus the math minus which is not in `Pd`
const DASH_CLASS: &str = r"[\p{Pd}\x{2212}]";
const MATH_MINUS: char = '\u{2212}';

/// One matched chunk: the text before a number, and the number itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'t> {
    /// Text preceding the number, including surrounding whitespace
    pub text: &'t str,
    /// The number exactly as written
    pub number: &'t str,
    /// Byte offset just past the number
    pub end: usize,
}

/// Compiled segmentation rule for one numeric profile
#[derive(Debug, Clone)]
pub struct ChunkPattern {
    chunk: Regex,
    minus: Option<Regex>,
    grouping: Option<Regex>,
    decimal: Option<Regex>,
    profile: NumericProfile,
}

impl ChunkPattern {
    /// Compile the chunk pattern for a profile
    ///
    /// Absent symbols drop their sub-pattern entirely. A dash-like minus
    /// sign accepts every dash, and a whitespace grouping separator accepts
    /// every whitespace character.
    pub fn new(profile: NumericProfile) -> Result<Self> {
        let minus = profile.minus_sign.map(|ch| {
            if ch == MATH_MINUS || is_dash(ch) {
                DASH_CLASS.to_string()
            } else {
                literal(ch)
            }
        });
        let grouping = profile.grouping_separator.map(|ch| {
            if ch.is_whitespace() {
                WHITESPACE.to_string()
            } else {
                literal(ch)
            }
        });
        let decimal = profile.decimal_separator.map(literal);

        let mut number = String::new();
        if let Some(minus) = &minus {
            number.push_str(&format!("{minus}?"));
        }
        if let Some(grouping) = &grouping {
            number.push_str(&format!("(?:{DIGIT}+{grouping})*"));
        }
        number.push_str(&format!("{DIGIT}+"));
        if let Some(decimal) = &decimal {
            number.push_str(&format!("(?:{decimal}{DIGIT}+)?"));
        }

        let source = format!(r"(?s)({WHITESPACE}*.*?{WHITESPACE}*)({number})");
        log::debug!("Chunk pattern for {profile}: {source}");

        Ok(Self {
            chunk: Regex::new(&source)?,
            minus: minus.map(|p| Regex::new(&p)).transpose()?,
            grouping: grouping.map(|p| Regex::new(&p)).transpose()?,
            decimal: decimal.map(|p| Regex::new(&p)).transpose()?,
            profile,
        })
    }

    /// Profile this pattern was compiled from
    pub fn profile(&self) -> &NumericProfile {
        &self.profile
    }

    /// Match the next chunk starting at byte offset `start`
    pub fn find_at<'t>(&self, haystack: &'t str, start: usize) -> Option<Segment<'t>> {
        let caps = self.chunk.captures_at(haystack, start)?;
        let text = caps.get(1)?;
        let number = caps.get(2)?;
        Some(Segment {
            text: text.as_str(),
            number: number.as_str(),
            end: number.end(),
        })
    }

    /// Iterate over all chunks of `haystack`
    pub fn segments<'p, 't>(&'p self, haystack: &'t str) -> Segments<'p, 't> {
        Segments {
            pattern: self,
            haystack,
            offset: 0,
        }
    }

    /// Rewrite locale symbols in a matched number to `-`, nothing and `.`
    pub fn canonicalize_number<'t>(&self, number: &'t str) -> Cow<'t, str> {
        let mut canonical = Cow::Borrowed(number);
        if let Some(minus) = &self.minus {
            canonical = replace_all(canonical, minus, "-");
        }
        if let Some(grouping) = &self.grouping {
            canonical = replace_all(canonical, grouping, "");
        }
        if let Some(decimal) = &self.decimal {
            canonical = replace_all(canonical, decimal, ".");
        }
        canonical
    }
}

/// Iterator over the chunks of a string
#[derive(Debug)]
pub struct Segments<'p, 't> {
    pattern: &'p ChunkPattern,
    haystack: &'t str,
    offset: usize,
}

impl<'t> Segments<'_, 't> {
    /// Text after the last chunk yielded so far
    pub fn remainder(&self) -> &'t str {
        &self.haystack[self.offset..]
    }
}

impl<'t> Iterator for Segments<'_, 't> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.pattern.find_at(self.haystack, self.offset)?;
        self.offset = segment.end;
        Some(segment)
    }
}

fn literal(ch: char) -> String {
    format!("(?:{})", regex::escape(ch.encode_utf8(&mut [0u8; 4])))
}

fn replace_all<'t>(text: Cow<'t, str>, pattern: &Regex, replacement: &str) -> Cow<'t, str> {
    match text {
        Cow::Borrowed(text) => pattern.replace_all(text, replacement),
        Cow::Owned(text) => Cow::Owned(pattern.replace_all(&text, replacement).into_owned()),
    }
}
