macro_rules! op {
    (+) => { crate::Operator::Add };
    (-) => { crate::Operator::Subtract };
    (*) => { crate::Operator::Multiply };
    (/) => { crate::Operator::Divide };
    (^) => { crate::Operator::Power };
}

macro_rules! num {
    ($op:tt $v:expr) => { crate::Element::Number(crate::NumberNode::new(op!($op), $v)) };
}

macro_rules! group {
    ($op:tt [ $($child:expr),* $(,)? ]) => {
        crate::Element::Group(crate::GroupNode::with_children(op!($op), alloc::vec![ $($child),* ]))
    };
}

macro_rules! root {
    ($($child:expr),* $(,)?) => {
        crate::GroupNode::with_children(crate::Operator::Add, alloc::vec![ $($child),* ])
    };
}

macro_rules! parse {
    ($canonical:expr) => { crate::Parser::new($canonical).parse().unwrap() };
}

macro_rules! assert_evaluates {
    ($text:expr, $expected:expr $(,)?) => {
        assert_eq!(crate::evaluate($text), Some($expected), "evaluating {:?}", $text)
    };
}
