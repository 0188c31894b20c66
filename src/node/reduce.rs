//! Reduction of a node tree to a single number.
//!
//! Each group is reduced by turning its children into a flat list of numbers (reducing any child
//! groups first), then collapsing that list in three passes, one per precedence tier: powers, then
//! multiplication and division, then addition and subtraction. Each pass runs left to right,
//! folding an element into its left neighbour wherever the element's operator belongs to the tier.
//!
//! Once all passes have run, one element is left. If that element is tagged `Subtract`, its value
//! is negated, which is how a leading minus in a group such as `(-2*3)` takes effect.

use alloc::vec::Vec;
use core::convert::Infallible;

use crate::error::MathsError;

use super::element::{Element, GroupNode, NumberNode, Operator};

/// What to do when a finite calculation overflows to infinity.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum OverflowPolicy {
    /// Follow floating-point semantics, producing an infinity.
    Infinity,

    /// Fail with [MathsError::Overflow].
    Error,
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct EvaluationSettings {
    pub overflow: OverflowPolicy,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self { overflow: OverflowPolicy::Infinity }
    }
}

impl EvaluationSettings {
    /// Applies `operator` to a pair of values, checking the result against these settings.
    ///
    /// An infinite result only counts as overflow if both operands were finite and the operation
    /// wasn't at a pole (`x/0` or `0^-y`), which are infinite by definition rather than too large.
    pub fn combine(&self, operator: Operator, lhs: f64, rhs: f64) -> Result<f64, MathsError> {
        let result = operator.apply(lhs, rhs);

        let at_pole = match operator {
            Operator::Divide => rhs == 0.0,
            Operator::Power => lhs == 0.0 && rhs < 0.0,
            _ => false,
        };

        if self.overflow == OverflowPolicy::Error
            && result.is_infinite()
            && lhs.is_finite()
            && rhs.is_finite()
            && !at_pole
        {
            return Err(MathsError::Overflow);
        }

        Ok(result)
    }
}

impl Element {
    /// Reduces this element into a single number. For a number, this is just its value.
    pub fn reduce(&self) -> f64 {
        unwrap_infallible(self.fold(&|op, lhs, rhs| Ok(op.apply(lhs, rhs))))
    }

    /// Reduces this element into a single number, returning an error if the `settings` reject any
    /// intermediate result.
    pub fn evaluate(&self, settings: &EvaluationSettings) -> Result<f64, MathsError> {
        self.fold(&|op, lhs, rhs| settings.combine(op, lhs, rhs))
    }

    fn fold<E>(&self, combine: &dyn Fn(Operator, f64, f64) -> Result<f64, E>) -> Result<f64, E> {
        match self {
            Element::Group(g) => g.fold(combine),
            Element::Number(n) => Ok(n.value()),
        }
    }
}

impl GroupNode {
    /// Reduces this group into a single number.
    pub fn reduce(&self) -> f64 {
        unwrap_infallible(self.fold(&|op, lhs, rhs| Ok(op.apply(lhs, rhs))))
    }

    /// Reduces this group into a single number, returning an error if the `settings` reject any
    /// intermediate result.
    pub fn evaluate(&self, settings: &EvaluationSettings) -> Result<f64, MathsError> {
        self.fold(&|op, lhs, rhs| settings.combine(op, lhs, rhs))
    }

    fn fold<E>(&self, combine: &dyn Fn(Operator, f64, f64) -> Result<f64, E>) -> Result<f64, E> {
        let mut elements = self.children.iter()
            .map(|child| child.fold(combine).map(|value| NumberNode::new(child.operator(), value)))
            .collect::<Result<Vec<_>, E>>()?;

        // Powers take the right operand's operator, so that whatever follows a chain like a^b^c
        // still sees the trailing operator
        collapse(&mut elements, Operator::is_power, |left, right| {
            combine(Operator::Power, left.value(), right.value())
                .map(|value| NumberNode::new(right.operator(), value))
        })?;

        collapse(&mut elements, Operator::is_term, |left, right| {
            combine(right.operator(), left.value(), right.value())
                .map(|value| NumberNode::new(left.operator(), value))
        })?;

        // A left operand tagged Subtract will be negated later, so it has to be combined with the
        // inverse operator now: -2+3 is folded as -(2-3)
        collapse(&mut elements, Operator::is_sum, |left, right| {
            let op = if left.operator() == Operator::Subtract {
                right.operator().inverse()
            } else {
                right.operator()
            };
            combine(op, left.value(), right.value())
                .map(|value| NumberNode::new(left.operator(), value))
        })?;

        Ok(match elements.first() {
            Some(head) if head.operator() == Operator::Subtract => -head.value(),
            Some(head) => head.value(),
            None => 0.0,
        })
    }
}

/// Runs one reduction pass over `elements`. Scanning from the second element, any element whose
/// operator matches `tier` is merged into its left neighbour by `merge`, and the scan stays at the
/// same index to look at the element which has moved into place.
fn collapse<E>(
    elements: &mut Vec<NumberNode>,
    tier: impl Fn(Operator) -> bool,
    merge: impl Fn(&NumberNode, &NumberNode) -> Result<NumberNode, E>,
) -> Result<(), E> {
    let mut i = 1;
    while i < elements.len() {
        if tier(elements[i].operator()) {
            elements[i - 1] = merge(&elements[i - 1], &elements[i])?;
            elements.remove(i);
        } else {
            i += 1;
        }
    }

    Ok(())
}

fn unwrap_infallible(result: Result<f64, Infallible>) -> f64 {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
