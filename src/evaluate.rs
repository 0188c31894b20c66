//! Entry points which run the whole pipeline: validate, normalize, parse, reduce.

use alloc::string::String;
use tracing::{debug, error, trace};

use crate::{
    error::CalcError,
    node::{element::GroupNode, parser::Parser, reduce::EvaluationSettings},
    normalize::normalize,
    validate::is_expression,
};

/// Evaluates an expression, returning `None` if it isn't a valid expression.
///
/// Overflow follows floating-point semantics, so very large results become infinite, as does
/// division by zero.
pub fn evaluate(text: &str) -> Option<f64> {
    match calculate(text, &EvaluationSettings::default()) {
        Ok(result) => Some(result),
        Err(CalcError::InvalidSyntax) => None,
        Err(err) => {
            // Validated text should always normalize and parse
            error!(input = text, error = %err, "internal failure evaluating expression");
            None
        }
    }
}

/// Evaluates an expression, reporting which stage failed if it can't be evaluated.
///
/// Use [OverflowPolicy::Error](crate::node::reduce::OverflowPolicy::Error) in the `settings` to
/// have overflow reported as an error, instead of producing an infinite result.
pub fn calculate(text: &str, settings: &EvaluationSettings) -> Result<f64, CalcError> {
    let tree = parse_expression(text)?;
    Ok(tree.evaluate(settings)?)
}

/// Validates and normalizes an expression, returning its canonical form, or `None` if it isn't a
/// valid expression.
pub fn canonicalize(text: &str) -> Option<String> {
    if is_expression(text) {
        Some(normalize(text))
    } else {
        None
    }
}

/// Validates, normalizes and parses an expression into a node tree, without reducing it.
pub fn parse_expression(text: &str) -> Result<GroupNode, CalcError> {
    let canonical = canonicalize(text).ok_or_else(|| {
        debug!(input = text, "rejected invalid expression");
        CalcError::InvalidSyntax
    })?;
    trace!(%canonical, "normalized expression");

    let tree = Parser::new(&canonical).parse()?;
    trace!(tree = %tree, "parsed expression");

    Ok(tree)
}
