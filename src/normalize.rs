//! Rewrites a validated expression into its canonical form.
//!
//! The canonical form is wrapped in an outer pair of parentheses, has no redundant signs, makes
//! every implicit multiplication explicit, and brackets every operand whose scope would otherwise
//! depend on precedence: a signed operand following another operator (`3*-4` becomes `3*(-4)`),
//! and the base and exponent of every power (`-2^4` becomes `-(2^4)`). After this, the parser only
//! needs to know about parentheses and a flat list of operators within each group.

use alloc::string::String;

use crate::text::{is_numeral, is_operator, strip_spaces, wrap};

/// Rewrites `text` into canonical form.
///
/// Only defined for text where [is_expression](crate::validate::is_expression) holds. On other
/// input this won't panic, but the result is meaningless.
pub fn normalize(text: &str) -> String {
    let mut calc = wrap(&strip_spaces(text));

    collapse_signs(&mut calc);
    bracket_signed_operands(&mut calc);
    bracket_powers(&mut calc);
    insert_implicit_multiplications(&calc)
}

/// Collapses adjacent pairs of signs until none remain. A single pass isn't enough, since
/// collapsing can form a new pair: `+--` becomes `++`, which then becomes `+`.
fn collapse_signs(calc: &mut String) {
    loop {
        let collapsed = calc
            .replace("++", "+")
            .replace("--", "+")
            .replace("+-", "-")
            .replace("-+", "-");

        if collapsed == *calc {
            return;
        }
        *calc = collapsed;
    }
}

/// Wherever two operators are adjacent (which after sign collapsing means a sign following `*`,
/// `/` or `^`), brackets the sign together with the operand it applies to: `3*-4` becomes
/// `3*(-4)`.
///
/// After `*` or `/` the operand takes in any `^` chain following it, so `2*-3^2` becomes
/// `2*(-3^2)`. After `^` it's only the immediate operand, so `2^-3^2` becomes `2^(-3)^2` and the
/// chain still folds from the left.
fn bracket_signed_operands(calc: &mut String) {
    let mut i = 0;
    while i + 1 < calc.len() {
        let bytes = calc.as_bytes();
        if is_operator(bytes[i]) && is_operator(bytes[i + 1]) {
            let end = if bytes[i] == b'^' {
                scan_operand_forward(bytes, i + 2)
            } else {
                scan_power_operand(bytes, i + 2)
            };
            calc.insert(end, ')');
            calc.insert(i + 1, '(');
        }
        i += 1;
    }
}

/// Brackets the base and exponent of every `^` together: `-2^4` becomes `-(2^4)`, and `1+2^3`
/// becomes `1+(2^3)`.
///
/// Powers are handled from left to right, so a chain brackets as `((2^3)^2)`.
fn bracket_powers(calc: &mut String) {
    let mut i = 0;
    while i < calc.len() {
        if calc.as_bytes()[i] == b'^' {
            let bytes = calc.as_bytes();
            let start = scan_operand_backward(bytes, i);
            let end = scan_operand_forward(bytes, i + 1);
            calc.insert(end, ')');
            calc.insert(start, '(');

            // The '^' has moved one place right
            i += 1;
        }
        i += 1;
    }
}

/// Inserts an explicit `*` between a group or numeral and a following group (`)(`, `3(`), and
/// between a group and a following numeral (`)3`).
fn insert_implicit_multiplications(calc: &str) -> String {
    let mut result = String::with_capacity(calc.len());
    let mut previous = None;

    for c in calc.bytes() {
        if let Some(p) = previous {
            let closes_operand = p == b')' || is_numeral(p);
            let opens_operand = c == b'(' || (p == b')' && is_numeral(c));
            if closes_operand && opens_operand {
                result.push('*');
            }
        }

        result.push(c as char);
        previous = Some(c);
    }

    result
}

/// Returns the index one past the end of the operand starting at `start`. The operand is either a
/// run of numeral characters, or a balanced group if `start` is an opening parenthesis.
///
/// If there is no operand at `start`, returns `start`. An unclosed group extends to the end.
fn scan_operand_forward(bytes: &[u8], start: usize) -> usize {
    match bytes.get(start) {
        Some(b'(') => {
            let mut depth = 0usize;
            for (i, &c) in bytes.iter().enumerate().skip(start) {
                match c {
                    b'(' => depth += 1,
                    b')' => {
                        depth -= 1;
                        if depth == 0 {
                            return i + 1;
                        }
                    }
                    _ => (),
                }
            }
            bytes.len()
        }

        Some(&c) if is_numeral(c) => bytes[start..]
            .iter()
            .position(|&c| !is_numeral(c))
            .map_or(bytes.len(), |len| start + len),

        _ => start,
    }
}

/// Returns the index of the first character of the operand which ends just before `end`. Mirrors
/// [scan_operand_forward]: either a run of numeral characters, or a balanced group if the
/// character before `end` is a closing parenthesis.
///
/// If there is no operand before `end`, returns `end`. An unopened group extends to the start.
fn scan_operand_backward(bytes: &[u8], end: usize) -> usize {
    match end.checked_sub(1).map(|i| bytes[i]) {
        Some(b')') => {
            let mut depth = 0usize;
            for i in (0..end).rev() {
                match bytes[i] {
                    b')' => depth += 1,
                    b'(' => {
                        depth -= 1;
                        if depth == 0 {
                            return i;
                        }
                    }
                    _ => (),
                }
            }
            0
        }

        Some(c) if is_numeral(c) => bytes[..end]
            .iter()
            .rposition(|&c| !is_numeral(c))
            .map_or(0, |i| i + 1),

        _ => end,
    }
}

/// Like [scan_operand_forward], but also consumes any `^` chain following the operand, including
/// signs on its exponents. This makes `*-3^2` bracket as `*(-3^2)` rather than `*(-3)^2`.
fn scan_power_operand(bytes: &[u8], start: usize) -> usize {
    let mut end = scan_operand_forward(bytes, start);
    while bytes.get(end) == Some(&b'^') {
        let mut next = end + 1;
        while matches!(bytes.get(next), Some(b'+' | b'-')) {
            next += 1;
        }
        end = scan_operand_forward(bytes, next);
    }

    end
}
