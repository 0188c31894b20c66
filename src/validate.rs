//! Decides whether a string is a legal expression, before any rewriting takes place.
//!
//! Validation is a pure predicate with no partial-validity reporting: either every check passes, or
//! the text is rejected.

use crate::text::{is_allowed, is_numeral, strip_spaces, wrap};

/// Pairs of adjacent characters which can never appear in a legal expression, checked after the
/// expression is wrapped in an outer pair of parentheses.
const ILLEGAL_PAIRS: &[&[u8; 2]] = &[
    // Two operators, where the second is not a sign
    b"**", b"*/", b"*^", b"//", b"/*", b"/^", b"^^", b"^*", b"^/",
    b"+*", b"+/", b"+^", b"-*", b"-/", b"-^",

    // Operator with no right operand
    b"+)", b"-)", b"*)", b"/)", b"^)",

    // Operator with no left operand (signs are fine here)
    b"(*", b"(/", b"(^",

    // Empty group
    b"()",

    // Numeral ending in a decimal point
    b".(", b".)", b".+", b".-", b".*", b"./", b".^",
];

/// Returns true if `text` is a syntactically legal expression.
///
/// Spaces are ignored. Beyond that, the text must have balanced parentheses, contain only digits,
/// `.`, `+ - * / ^` and parentheses, have no numeral with more than one decimal point (or ending
/// in one), and contain none of the [ILLEGAL_PAIRS].
pub fn is_expression(text: &str) -> bool {
    let stripped = strip_spaces(text);

    if !brackets_balanced(stripped.as_bytes()) || !stripped.bytes().all(is_allowed) {
        return false;
    }

    let wrapped = wrap(&stripped);
    let wrapped = wrapped.as_bytes();
    numerals_well_formed(wrapped) && !contains_illegal_pair(wrapped)
}

/// Returns true if no prefix closes more groups than it opens, and every group is closed by the
/// end.
fn brackets_balanced(text: &[u8]) -> bool {
    let mut depth = 0usize;
    for &c in text {
        match c {
            b'(' => depth += 1,
            b')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => (),
        }
    }

    depth == 0
}

/// Scans runs of numeral characters. Each run may contain at most one decimal point, and must not
/// end with one.
fn numerals_well_formed(text: &[u8]) -> bool {
    let mut seen_point = false;
    let mut last_was_point = false;

    for &c in text {
        if c == b'.' {
            if seen_point {
                return false;
            }
            seen_point = true;
            last_was_point = true;
        } else if is_numeral(c) {
            last_was_point = false;
        } else {
            if last_was_point {
                return false;
            }
            seen_point = false;
            last_was_point = false;
        }
    }

    true
}

fn contains_illegal_pair(text: &[u8]) -> bool {
    text.windows(2)
        .any(|window| ILLEGAL_PAIRS.iter().any(|pair| pair[..] == *window))
}
