use proptest::prelude::*;
use reckon::{Calculator, ErrorKind, EvalError, Value, evaluate};
use rstest::rstest;

/// Two results agree if they hold the same value (NaN included) or fail
/// with the same kind of error.
fn same_outcome(left: &Result<Value, EvalError>, right: &Result<Value, EvalError>) -> bool {
    match (left, right) {
        (Ok(Value::Real(l)), Ok(Value::Real(r))) => l == r || (l.is_nan() && r.is_nan()),
        (Ok(l), Ok(r)) => l == r,
        (Err(l), Err(r)) => l.kind() == r.kind(),
        _ => false,
    }
}

#[rstest]
#[case("1 + 2", Value::Integer(3))]
#[case("1 - 2", Value::Integer(-1))]
#[case("3 * 4", Value::Integer(12))]
#[case("9 / 4", Value::Integer(2))]
#[case("3 ^ 3", Value::Integer(27))]
#[case("1.5 + 2", Value::Real(3.5))]
#[case("1 - 0.5", Value::Real(0.5))]
#[case("2.5 * 2", Value::Real(5.0))]
#[case("9 / 4.0", Value::Real(2.25))]
#[case("4.0 ^ 2", Value::Real(16.0))]
fn binary_operators(#[case] src: &str, #[case] expected: Value) {
    assert_eq!(evaluate(src).unwrap(), expected);
}

#[rstest]
#[case("2 + 3 * 4", "2 + (3 * 4)")]
#[case("2 * 3 + 4", "(2 * 3) + 4")]
#[case("10 - 3 - 2", "(10 - 3) - 2")]
#[case("64 / 4 / 2", "(64 / 4) / 2")]
#[case("2 ^ 3 ^ 2", "2 ^ (3 ^ 2)")]
#[case("-2 ^ 2", "-(2 ^ 2)")]
#[case("-2 * 3", "(-2) * 3")]
#[case("2 * 3 ^ 2", "2 * (3 ^ 2)")]
#[case("1 + 2 * 3 ^ 2 - 4 / 2", "(1 + (2 * (3 ^ 2))) - (4 / 2)")]
fn grouping_matches_explicit_parentheses(#[case] implicit: &str, #[case] explicit: &str) {
    assert_eq!(evaluate(implicit).unwrap(), evaluate(explicit).unwrap());
}

#[rstest]
#[case("(", ErrorKind::Syntax)]
#[case(")", ErrorKind::Syntax)]
#[case("1 +* 2", ErrorKind::Syntax)]
#[case("1 ^", ErrorKind::Syntax)]
#[case("* 2", ErrorKind::Syntax)]
#[case("1 / (3 - 3)", ErrorKind::DivisionByZero)]
#[case("123456789012345678901234567890", ErrorKind::InvalidLiteral)]
fn failures(#[case] src: &str, #[case] kind: ErrorKind) {
    assert_eq!(evaluate(src).unwrap_err().kind(), kind);
}

/// Expressions that the grammar accepts, built from numbers, binary
/// operators, prefix minus and parentheses.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0i64..1000).prop_map(|n| n.to_string()),
                           (0u32..100, 0u32..100).prop_map(|(i, f)| format!("{i}.{f}")),];

    leaf.prop_recursive(3, 24, 3, |inner| {
            prop_oneof![inner.clone().prop_map(|e| format!("({e})")),
                        inner.clone().prop_map(|e| format!("-({e})")),
                        (inner.clone(), prop::sample::select(vec!["+", "-", "*", "/", "^"]), inner)
                            .prop_map(|(l, op, r)| format!("{l} {op} {r}")),]
        })
}

proptest! {
    #[test]
    fn parenthesizing_whole_expression_changes_nothing(src in expression()) {
        let calculator = Calculator::new().unwrap();
        let bare = calculator.evaluate(&src);
        let wrapped = calculator.evaluate(&format!("({src})"));

        prop_assert!(same_outcome(&bare, &wrapped), "{src:?}: {bare:?} vs {wrapped:?}");
    }

    #[test]
    fn generated_expressions_parse(src in expression()) {
        let calculator = Calculator::new().unwrap();
        prop_assert!(calculator.parse(&src).is_ok(), "{src:?} did not parse");
    }

    #[test]
    fn evaluation_never_panics(src in "[0-9 .()+*/^a-]{0,16}") {
        let _ = evaluate(&src);
    }
}
