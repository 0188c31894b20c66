//! The node tree which an expression is parsed into, and the operations on it.
//!
//! A tree is made of two kinds of [element](element::Element): [groups](element::GroupNode), which
//! represent a parenthesised sub-expression, and [numbers](element::NumberNode), which are leaves.
//! Every element is tagged with the [operator](element::Operator) that combines it with the
//! elements to its left in the same group.
//!
//! Trees are built by the [parser] from canonical text, then [reduced](reduce) to a number. They
//! can also be [rendered](render) as indented text.

pub mod element;
pub mod parser;
pub mod reduce;
pub mod render;
