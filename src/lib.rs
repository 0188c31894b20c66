//! A calculator for arithmetic expressions given as text.
//!
//! Expressions support `+ - * / ^`, parentheses, decimal numbers, implicit multiplication such as
//! `3(4+2)`, and signs in any position where they make sense, like `2^-2` or `--5`. Evaluation
//! follows the usual precedence: powers bind tighter than multiplication and division, which bind
//! tighter than addition and subtraction.
//!
//! Evaluation happens in four stages:
//!   1. [Validation](mod@validate), which rejects anything which isn't a legal expression.
//!   2. [Normalization](mod@normalize), which rewrites the text into a canonical form where every
//!      implicit multiplication is explicit, and every operand whose scope depends on precedence
//!      is bracketed.
//!   3. [Parsing](node::parser), which builds a [tree](node) of groups and numbers from the
//!      canonical text.
//!   4. [Reduction](node::reduce), which collapses the tree into a single number.
//!
//! The easiest way to run all of these is [evaluate()]:
//!
//! ```
//! assert_eq!(parcalc::evaluate("3(4+2)"), Some(18.0));
//! assert_eq!(parcalc::evaluate("-2^4"), Some(-16.0));
//! assert_eq!(parcalc::evaluate("1+"), None);
//! ```

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod error;
pub mod evaluate;
pub mod node;
pub mod normalize;
pub mod validate;
mod text;

#[cfg(test)]
pub mod tests;

pub use crate::{
    error::{CalcError, MathsError, NodeError},
    evaluate::{calculate, canonicalize, evaluate, parse_expression},
    node::{
        element::{Element, GroupNode, NumberNode, Operator},
        parser::Parser,
        reduce::{EvaluationSettings, OverflowPolicy},
    },
    normalize::normalize,
    validate::is_expression,
};

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
