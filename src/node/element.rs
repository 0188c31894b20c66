use alloc::vec::Vec;
use core::fmt;

use num_traits::Float;

/// One of the five binary operators.
///
/// Every element of a node tree is tagged with an operator, describing how its value combines with
/// the running total of the elements to its left.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Converts an operator character into an operator, or `None` if it isn't one.
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }

    /// Returns true if this is `Power`, the highest precedence tier.
    pub fn is_power(self) -> bool {
        self == Operator::Power
    }

    /// Returns true if this is `Multiply` or `Divide`.
    pub fn is_term(self) -> bool {
        matches!(self, Operator::Multiply | Operator::Divide)
    }

    /// Returns true if this is `Add` or `Subtract`, the lowest precedence tier.
    pub fn is_sum(self) -> bool {
        matches!(self, Operator::Add | Operator::Subtract)
    }

    /// Swaps `Add` and `Subtract`. Other operators have no inverse here and are returned unchanged.
    pub fn inverse(self) -> Operator {
        match self {
            Operator::Add => Operator::Subtract,
            Operator::Subtract => Operator::Add,
            other => other,
        }
    }

    /// Applies this operator, with standard floating-point semantics.
    pub fn apply<F: Float>(self, lhs: F, rhs: F) -> F {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
            Operator::Power => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A node in the tree built by the [Parser](crate::node::parser::Parser).
#[derive(PartialEq, Debug, Clone)]
pub enum Element {
    Group(GroupNode),
    Number(NumberNode),
}

impl Element {
    /// The operator combining this element with its left siblings.
    pub fn operator(&self) -> Operator {
        match self {
            Element::Group(g) => g.operator,
            Element::Number(n) => n.operator,
        }
    }
}

impl From<GroupNode> for Element {
    fn from(group: GroupNode) -> Self {
        Element::Group(group)
    }
}

impl From<NumberNode> for Element {
    fn from(number: NumberNode) -> Self {
        Element::Number(number)
    }
}

/// A parenthesised sub-expression: an ordered list of child elements, from left to right as they
/// appeared in the text.
#[derive(PartialEq, Debug, Clone)]
pub struct GroupNode {
    pub(crate) operator: Operator,
    pub(crate) children: Vec<Element>,
}

impl GroupNode {
    /// Creates a group with no children.
    pub fn new(operator: Operator) -> Self {
        Self { operator, children: Vec::new() }
    }

    pub fn with_children(operator: Operator, children: Vec<Element>) -> Self {
        Self { operator, children }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Appends a child to the right-hand end of this group.
    pub fn push(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }
}

/// A leaf holding a number. The value is fixed at construction.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct NumberNode {
    operator: Operator,
    value: f64,
}

impl NumberNode {
    pub fn new(operator: Operator, value: f64) -> Self {
        Self { operator, value }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
