use alloc::string::String;
use thiserror::Error;

/// A failure while building a node tree from canonical text.
///
/// Canonical text comes from [normalize](crate::normalize::normalize), so these only surface if
/// the normalizer and the parser disagree about what a well-formed expression looks like.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodeError {
    #[error("canonical text is not a valid expression: {0}")]
    Malformed(String),

    #[error("unexpected character '{character}' at index {index}")]
    UnexpectedCharacter { index: usize, character: char },

    #[error("invalid numeral '{0}'")]
    InvalidNumeral(String),

    #[error("group opened at index {0} is never closed")]
    UnclosedGroup(usize),

    #[error("unexpected input after index {0}")]
    TrailingInput(usize),
}

/// A failure while reducing a node tree to a number.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathsError {
    #[error("result too large")]
    Overflow,
}

/// Any failure of the full text-to-number pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("invalid expression")]
    InvalidSyntax,

    #[error(transparent)]
    Node(#[from] NodeError),

    #[error(transparent)]
    Maths(#[from] MathsError),
}
