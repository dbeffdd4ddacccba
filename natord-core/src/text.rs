//! Unicode text helpers
//!
//! Whitespace here means the Unicode `White_Space` property, which
//! includes no-break spaces such as U+00A0 and U+202F. Digit and dash
//! classes use the same regex property tables as the chunk pattern, so a
//! character the pattern matches as `\p{Nd}` is always a digit here.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

static DECIMAL_DIGIT: OnceLock<Option<Regex>> = OnceLock::new();
static DASH: OnceLock<Option<Regex>> = OnceLock::new();

fn class_matches(class: &'static OnceLock<Option<Regex>>, pattern: &str, ch: char) -> bool {
    let regex = class.get_or_init(|| match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::error!("Failed to compile character class {pattern}: {e}");
            None
        }
    });
    let mut buf = [0u8; 4];
    regex
        .as_ref()
        .is_some_and(|regex| regex.is_match(ch.encode_utf8(&mut buf)))
}

/// Whether `ch` is a Unicode decimal digit (`Nd`)
pub fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit() || class_matches(&DECIMAL_DIGIT, r"\A\p{Nd}\z", ch)
}

/// Whether `ch` is dash punctuation (`Pd`)
pub fn is_dash(ch: char) -> bool {
    ch == '-' || class_matches(&DASH, r"\A\p{Pd}\z", ch)
}

/// Collapse every whitespace run to a single ASCII space and trim both ends
///
/// Borrows when the input is already in collapsed form.
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    if is_collapsed(text) {
        return Cow::Borrowed(text);
    }

    let mut collapsed = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(word);
    }
    Cow::Owned(collapsed)
}

fn is_collapsed(text: &str) -> bool {
    let mut prev_space = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if prev_space || ch != ' ' {
                return false;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
    }
    // Trailing space
    !(prev_space && !text.is_empty())
}
