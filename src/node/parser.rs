use alloc::string::ToString;

use crate::{
    error::NodeError,
    text::{is_numeral, is_operator},
    validate::is_expression,
};

use super::element::{GroupNode, NumberNode, Operator};

/// Builds a node tree from canonical text, as produced by
/// [normalize](crate::normalize::normalize).
///
/// The parser never rewrites its input. Each recursive call reads from the same immutable text,
/// starting at a given index, and hands back the group it built along with the index of the
/// parenthesis which closed it.
pub struct Parser<'a> {
    input: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Parses the whole input, which must be a single group wrapped in parentheses. The returned
    /// root group has the operator `Add`.
    pub fn parse(&self) -> Result<GroupNode, NodeError> {
        if !is_expression(self.input) || !self.input.starts_with('(') {
            return Err(NodeError::Malformed(self.input.to_string()));
        }

        let (root, close) = self.parse_group(Operator::Add, 1)?;
        if close >= self.input.len() {
            Err(NodeError::UnclosedGroup(0))
        } else if close + 1 < self.input.len() {
            Err(NodeError::TrailingInput(close))
        } else {
            Ok(root)
        }
    }

    /// Parses the contents of a group starting at `start`, which should be just after its opening
    /// parenthesis. Returns the group and the index of its closing parenthesis - or the length of
    /// the input, if the group is never closed.
    fn parse_group(&self, operator: Operator, start: usize) -> Result<(GroupNode, usize), NodeError> {
        let bytes = self.input.as_bytes();
        let mut group = GroupNode::new(operator);
        let mut current_op = Operator::Add;
        let mut numeral_start = None;

        let mut i = start;
        while i < bytes.len() {
            match bytes[i] {
                b'(' => {
                    let (child, close) = self.parse_group(current_op, i + 1)?;
                    group.push(child);
                    i = close;
                }

                b')' => {
                    self.flush_numeral(&mut group, current_op, numeral_start.take(), i)?;
                    return Ok((group, i));
                }

                c if is_numeral(c) => {
                    numeral_start.get_or_insert(i);
                }

                c if is_operator(c) => {
                    // The pending numeral belongs to the operator before this one
                    self.flush_numeral(&mut group, current_op, numeral_start.take(), i)?;
                    current_op = Operator::from_char(c as char)
                        .ok_or(NodeError::UnexpectedCharacter { index: i, character: c as char })?;
                }

                c => return Err(NodeError::UnexpectedCharacter { index: i, character: c as char }),
            }

            i += 1;
        }

        self.flush_numeral(&mut group, current_op, numeral_start, bytes.len())?;
        Ok((group, bytes.len()))
    }

    /// If a numeral is pending (started at `start` and ending before `end`), appends it to `group`
    /// as a number tagged with `operator`.
    fn flush_numeral(
        &self,
        group: &mut GroupNode,
        operator: Operator,
        start: Option<usize>,
        end: usize,
    ) -> Result<(), NodeError> {
        if let Some(start) = start {
            let numeral = &self.input[start..end];
            let value = numeral.parse::<f64>()
                .map_err(|_| NodeError::InvalidNumeral(numeral.to_string()))?;
            group.push(NumberNode::new(operator, value));
        }

        Ok(())
    }
}
