//! Character classes and small string helpers shared by the text stages (validation and
//! normalization) and the parser.

use alloc::{format, string::String};

/// Returns true for characters which make up a numeral: ASCII digits and the decimal point.
pub(crate) fn is_numeral(c: u8) -> bool {
    c.is_ascii_digit() || c == b'.'
}

/// Returns true for the five binary operator characters.
pub(crate) fn is_operator(c: u8) -> bool {
    matches!(c, b'+' | b'-' | b'*' | b'/' | b'^')
}

/// Returns true for every character an expression may contain once spaces are removed.
pub(crate) fn is_allowed(c: u8) -> bool {
    is_numeral(c) || is_operator(c) || c == b'(' || c == b')'
}

/// Removes every space from the text. Other whitespace is left alone, and is later rejected as a
/// disallowed character.
pub(crate) fn strip_spaces(text: &str) -> String {
    text.chars().filter(|&c| c != ' ').collect()
}

/// Wraps the text in an outer pair of parentheses, so that the start and end of the expression can
/// be treated like any other group boundary.
pub(crate) fn wrap(text: &str) -> String {
    format!("({})", text)
}
