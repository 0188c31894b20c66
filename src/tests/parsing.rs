use alloc::string::ToString;

use crate::{parse_expression, CalcError, NodeError, Parser};

#[test]
fn test_parse_flat() {
    assert_eq!(
        parse!("(2+3*4)"),
        root![num!(+ 2.0), num!(+ 3.0), num!(* 4.0)],
    );
    assert_eq!(
        parse!("(.5+1)"),
        root![num!(+ 0.5), num!(+ 1.0)],
    );
}

#[test]
fn test_parse_groups_take_preceding_operator() {
    assert_eq!(
        parse!("(3*(-4))"),
        root![
            num!(+ 3.0),
            group!(* [num!(- 4.0)]),
        ],
    );
    assert_eq!(
        parse!("(1-(2^2))"),
        root![
            num!(+ 1.0),
            group!(- [num!(+ 2.0), num!(^ 2.0)]),
        ],
    );
}

#[test]
fn test_parse_nested() {
    assert_eq!(
        parse!("((1.5))"),
        root![group!(+ [num!(+ 1.5)])],
    );
    assert_eq!(
        parse!("(-(2^4))"),
        root![group!(- [num!(+ 2.0), num!(^ 4.0)])],
    );
    assert_eq!(
        parse!("((1+2)*((3)^2))"),
        root![
            group!(+ [num!(+ 1.0), num!(+ 2.0)]),
            group!(* [
                group!(+ [num!(+ 3.0)]),
                num!(^ 2.0),
            ]),
        ],
    );
}

#[test]
fn test_parse_errors() {
    // Canonical text must itself be a valid expression
    assert_eq!(
        Parser::new("(1+)").parse(),
        Err(NodeError::Malformed("(1+)".to_string())),
    );

    // ...and a single group
    assert_eq!(Parser::new("(1)(2)").parse(), Err(NodeError::TrailingInput(2)));
    assert!(matches!(Parser::new("1+2").parse(), Err(NodeError::Malformed(_))));
}

#[test]
fn test_parse_expression() {
    assert_eq!(
        parse_expression("3*-4"),
        Ok(root![
            num!(+ 3.0),
            group!(* [num!(- 4.0)]),
        ]),
    );
    assert_eq!(parse_expression("3*"), Err(CalcError::InvalidSyntax));
}
