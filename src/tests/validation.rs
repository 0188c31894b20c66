use crate::is_expression;

#[test]
fn test_accepts_expressions() {
    for text in &[
        "1",
        "1+2",
        "1 + 2 * 3",
        "3(4+2)",
        "(1+2)(3+4)",
        "-2^4",
        "2^-2",
        "--5",
        "+-+-3",
        "3*-4",
        ".5+1",
        "12.25/0.5",
        "-(2+3)",
        "((2))",
        "2^+2",
        "(2)3",
        "1/0",
    ] {
        assert!(is_expression(text), "{:?} should be accepted", text);
    }
}

#[test]
fn test_rejects_unbalanced_brackets() {
    assert!(!is_expression("(1+2"));
    assert!(!is_expression("1+2)"));
    assert!(!is_expression(")1+2("));
    assert!(!is_expression("((1)"));
}

#[test]
fn test_rejects_disallowed_characters() {
    assert!(!is_expression("abc"));
    assert!(!is_expression("1+x"));
    assert!(!is_expression("2,5"));
    assert!(!is_expression("1e5"));
    assert!(!is_expression("1\t+2"));
}

#[test]
fn test_rejects_malformed_numerals() {
    assert!(!is_expression("1.2.3"));
    assert!(!is_expression("1..2"));
    assert!(!is_expression("3."));
    assert!(!is_expression("3.+1"));
    assert!(!is_expression("3.(1)"));
    assert!(!is_expression("."));

    // Points in separate numerals are fine
    assert!(is_expression("1.2+3.4"));
}

#[test]
fn test_rejects_illegal_adjacency() {
    assert!(!is_expression("3**4"));
    assert!(!is_expression("3*/4"));
    assert!(!is_expression("3^^4"));
    assert!(!is_expression("3+*4"));
    assert!(!is_expression("3-^4"));
    assert!(!is_expression("()"));
    assert!(!is_expression("(*3)"));
    assert!(!is_expression("(^3)"));
    assert!(!is_expression("(3-)"));
    assert!(!is_expression("1+"));
    assert!(!is_expression("*1"));

    // A sign before a group is fine
    assert!(is_expression("1+(2)"));
    assert!(is_expression("-(2)"));
}

#[test]
fn test_rejects_empty_input() {
    assert!(!is_expression(""));
    assert!(!is_expression("   "));
}

#[test]
fn test_is_pure() {
    let text = "2*(3+4)^-1";
    let first = is_expression(text);
    assert_eq!(is_expression(text), first);
    assert_eq!(text, "2*(3+4)^-1");
}
