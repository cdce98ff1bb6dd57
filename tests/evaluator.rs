use reckon::{
    ErrorKind, EvalError, Value,
    error::RuntimeError,
    interpreter::{
        evaluator::core::Evaluator,
        parser::{
            grammar,
            node::{Node, Span},
        },
    },
};

fn token(name: &'static str, text: &'static str, start: usize) -> Node<'static> {
    Node::Terminal { name,
                     span: Span::new(start, start + text.len()),
                     text }
}

fn run(nodes: &[Node<'static>]) -> Result<Value, RuntimeError> {
    let mut evaluator = Evaluator::new();
    for node in nodes {
        evaluator.visit(node)?;
    }
    evaluator.finish()
}

fn assert_stack_failure(nodes: &[Node<'static>], expected: &RuntimeError) {
    let err = run(nodes).unwrap_err();
    assert_eq!(&err, expected);
    assert_eq!(EvalError::from(err).kind(), ErrorKind::MalformedStackState);
}

#[test]
fn infix_token_stream_is_reduced() {
    let nodes = [token(grammar::INT, "2", 0),
                 token(grammar::BI_PLUS, "+", 2),
                 token(grammar::INT, "3", 4),
                 token(grammar::MUL, "*", 6),
                 token(grammar::INT, "4", 8)];

    assert_eq!(run(&nodes).unwrap(), Value::Integer(14));
}

#[test]
fn wrapper_nodes_are_ignored() {
    let nodes = [Node::sequence(grammar::INPUT, 0, Vec::new()),
                 token(grammar::WS, "", 0),
                 token(grammar::FLOAT, "1.5", 0)];

    assert_eq!(run(&nodes).unwrap(), Value::Real(1.5));
}

#[test]
fn operator_without_operands_is_malformed() {
    assert_stack_failure(&[token(grammar::MUL, "*", 0)],
                         &RuntimeError::MissingOperands { operator: grammar::MUL,
                                                          expected: 2,
                                                          found:    0,
                                                          position: 0, });
}

#[test]
fn leftover_operands_are_malformed() {
    assert_stack_failure(&[], &RuntimeError::UnevaluatedOperands { count: 0 });
    assert_stack_failure(&[token(grammar::INT, "1", 0), token(grammar::INT, "2", 2)],
                         &RuntimeError::UnevaluatedOperands { count: 2 });
}

#[test]
fn unclosed_group_leaves_operators() {
    assert_stack_failure(&[token(grammar::LPAREN, "(", 0), token(grammar::INT, "1", 1)],
                         &RuntimeError::UnevaluatedOperators { count: 1 });
}

#[test]
fn closing_outermost_group_loses_marker() {
    assert_stack_failure(&[token(grammar::INT, "1", 0), token(grammar::RPAREN, ")", 1)],
                         &RuntimeError::MissingGroupMarker);
}

#[test]
fn unmatched_close_is_syntax_error() {
    let nodes = [token(grammar::RPAREN, ")", 0), token(grammar::RPAREN, ")", 1)];

    let err = run(&nodes).unwrap_err();
    assert_eq!(err, RuntimeError::MismatchedGroup { position: 1 });
    assert_eq!(EvalError::from(err).kind(), ErrorKind::Syntax);
}

#[test]
fn real_is_not_an_integer() {
    assert_eq!(Value::Integer(3).as_integer(0).unwrap(), 3);

    let err = Value::Real(1.5).as_integer(4).unwrap_err();
    assert_eq!(EvalError::from(err).kind(), ErrorKind::UnsupportedOperandType);
}

#[test]
fn values_display_their_variant() {
    assert_eq!(Value::Integer(14).to_string(), "14");
    assert_eq!(Value::Real(3.0).to_string(), "3.0");
    assert_eq!(Value::Real(f64::INFINITY).to_string(), "inf");
    assert!(Value::Real(0.5).is_real());
    assert!(Value::from(7_i64).is_integer());
}
