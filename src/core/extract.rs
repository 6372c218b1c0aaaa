// src/core/extract.rs

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INTEGER_PREFIX_RE: Regex =
        Regex::new(r"^-?[0-9]+").expect("integer pattern is valid");
}

lazy_static! {
    // A leading pair of matching quotes. Nothing is escaped inside.
    static ref QUOTED_PREFIX_RE: Regex =
        Regex::new(r#"^(?:"([^"]*)"|'([^']*)')"#).expect("quoted string pattern is valid");
}

/// How the text after a boolean flag was understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanText {
    /// The text started with `0` or `1`.
    Explicit(bool),
    /// Nothing followed the flag.
    Bare,
    /// Something other than a digit followed the flag.
    Unrecognized,
}

/// Removes surrounding whitespace and at most one leading `=`.
pub fn strip_assignment(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed.strip_prefix('=').unwrap_or(trimmed).trim()
}

/// Extracts the longest `-?[0-9]+` prefix of the value text.
///
/// Returns `None` for empty or non-numeric text, a doubled `=`, or a number
/// that does not fit in an `i64`.
pub fn extract_integer(text: &str) -> Option<i64> {
    let value = strip_assignment(text);
    let digits = INTEGER_PREFIX_RE.find(value)?;
    digits.as_str().parse::<i64>().ok()
}

/// Extracts a string value: a quoted span if the text starts with a matching
/// pair of quotes, otherwise the first whitespace-delimited word.
pub fn extract_string(text: &str) -> String {
    let value = strip_assignment(text);
    if let Some(caps) = QUOTED_PREFIX_RE.captures(value)
        && let Some(inner) = caps.get(1).or_else(|| caps.get(2))
    {
        return inner.as_str().to_string();
    }
    value
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Classifies the text following a boolean flag by its first character.
pub fn extract_boolean(text: &str) -> BooleanText {
    let value = strip_assignment(text);
    match value.chars().next() {
        None => BooleanText::Bare,
        Some('1') => BooleanText::Explicit(true),
        Some('0') => BooleanText::Explicit(false),
        Some(_) => BooleanText::Unrecognized,
    }
}
