//! Renders a node tree as indented text, one element per line. This is mostly useful for debugging
//! how an expression was parsed:
//!
//! ```text
//! +(
//!   +3.0
//!   *(
//!     -4.0
//!   )
//! )
//! ```
//!
//! Values are written with `{:?}`, which keeps the `.0` on whole numbers and switches to exponent
//! notation for very large or small magnitudes, so `1e20` renders as `+1e20`.

use core::fmt;

use super::element::{Element, GroupNode, NumberNode};

/// The number of spaces each level of nesting is indented by.
const INDENT: usize = 2;

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_element(f, self, 0)
    }
}

impl fmt::Display for GroupNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_group(f, self, 0)
    }
}

impl fmt::Display for NumberNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_number(f, self, 0)
    }
}

fn write_element(f: &mut fmt::Formatter, element: &Element, depth: usize) -> fmt::Result {
    match element {
        Element::Group(g) => write_group(f, g, depth),
        Element::Number(n) => write_number(f, n, depth),
    }
}

fn write_group(f: &mut fmt::Formatter, group: &GroupNode, depth: usize) -> fmt::Result {
    writeln!(f, "{:indent$}{}(", "", group.operator(), indent = depth * INDENT)?;
    for child in group.children() {
        write_element(f, child, depth + 1)?;
    }
    writeln!(f, "{:indent$})", "", indent = depth * INDENT)
}

fn write_number(f: &mut fmt::Formatter, number: &NumberNode, depth: usize) -> fmt::Result {
    writeln!(f, "{:indent$}{}{:?}", "", number.operator(), number.value(), indent = depth * INDENT)
}
