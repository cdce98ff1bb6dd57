use std::time::{Duration, Instant};

use reckon::{
    Calculator, ErrorKind, EvalError,
    error::ParseError,
    interpreter::{
        lexer::Lexeme,
        parser::{
            core::{Failure, GrammarBuilder, Matcher},
            grammar::{self, arithmetic},
            node::{Node, Span},
        },
    },
};

#[test]
fn failed_sequence_does_not_consume_input() {
    let mut builder = GrammarBuilder::new();
    let int = builder.terminal("Int", Lexeme::Int);
    let plus = builder.terminal("Plus", Lexeme::Plus);
    let sum = builder.sequence("Sum", [int, plus, int]);
    let start = builder.alternative("Start", [sum, int]);
    let grammar = builder.build(start).unwrap();

    // `Sum` gets as far as `1+` before failing; `Int` then restarts at 0.
    let err = grammar.parse("1+").unwrap_err();
    assert_eq!(err,
               ParseError::UnexpectedTrailingTokens { token:    "+".to_string(),
                                                      position: 1, });
}

#[test]
fn alternative_returns_first_matching_branch() {
    let build = |sum_first: bool| {
        let mut builder = GrammarBuilder::new();
        let int = builder.terminal("Int", Lexeme::Int);
        let plus = builder.terminal("Plus", Lexeme::Plus);
        let sum = builder.sequence("Sum", [int, plus, int]);
        let branches = if sum_first { [sum, int] } else { [int, sum] };
        let start = builder.alternative("Start", branches);
        builder.build(start).unwrap()
    };

    let tree = build(true).parse("1+2").unwrap();
    assert_eq!(tree.children()[0].name(), "Sum");

    // `Int` succeeds on `1` and is kept even though `Sum` would cover more.
    let err = build(false).parse("1+2").unwrap_err();
    assert_eq!(err,
               ParseError::UnexpectedTrailingTokens { token:    "+2".to_string(),
                                                      position: 1, });
}

#[test]
fn terminal_matches_whole_lexeme_only() {
    let mut builder = GrammarBuilder::new();
    let int = builder.terminal("Int", Lexeme::Int);
    let float = builder.terminal("Float", Lexeme::Float);
    let start = builder.alternative("Number", [int, float]);
    let grammar = builder.build(start).unwrap();

    // `1.5` lexes as one float, so the `Int` branch fails outright.
    let tree = grammar.parse("1.5").unwrap();
    assert_eq!(tree.children()[0].name(), "Float");
    assert_eq!(tree.children()[0].text(), Some("1.5"));
}

#[test]
fn undefined_rule_is_reported_at_build_time() {
    let mut builder = GrammarBuilder::new();
    let expr = builder.declare("Expr");
    let int = builder.terminal("Int", Lexeme::Int);
    let start = builder.sequence("Start", [int, expr]);

    let err = builder.build(start).err().unwrap();
    assert_eq!(err, ParseError::UndefinedRule { name: "Expr".to_string() });
    assert_eq!(EvalError::from(err).kind(), ErrorKind::MalformedGrammar);
}

#[test]
fn declared_rule_can_be_defined_recursively() {
    let mut builder = GrammarBuilder::new();
    let list = builder.declare("List");
    let int = builder.terminal("Int", Lexeme::Int);
    let ws = builder.optional("WS", Lexeme::Whitespace);
    let more = builder.sequence("More", [int, ws, list]);
    builder.define(list, Matcher::Alternative(vec![more, int]));
    let grammar = builder.build(list).unwrap();

    let tree = grammar.parse("1 2 3").unwrap();
    let ints = tree.preorder().filter(|node| node.name() == "Int").count();
    assert_eq!(ints, 3);
    assert_eq!(tree.span(), Span::new(0, 5));
}

#[test]
fn optional_terminal_matches_empty_span() {
    let mut builder = GrammarBuilder::new();
    let ws = builder.optional("WS", Lexeme::Whitespace);
    let int = builder.terminal("Int", Lexeme::Int);
    let start = builder.sequence("Start", [ws, int]);
    let grammar = builder.build(start).unwrap();

    let tree = grammar.parse("7").unwrap();
    let blank = &tree.children()[0];
    assert_eq!(blank.span(), Span::empty(0));
    assert_eq!(blank.text(), Some(""));
    assert_eq!(tree.span(), Span::new(0, 1));
}

#[test]
fn preorder_visits_wrappers_before_children() {
    let grammar = arithmetic().unwrap();
    let tree = grammar.parse("-1").unwrap();

    let names: Vec<_> = tree.preorder().map(Node::name).collect();
    assert_eq!(names,
               ["Input", "WS", "Expr", "UnaryGroup", "UnOp", "UnMinus", "WS", "Primary", "Number",
                "Int", "WS"]);
}

#[test]
fn binary_chain_is_right_nested_in_textual_order() {
    let grammar = arithmetic().unwrap();
    let tree = grammar.parse("2 + 3 * 4").unwrap();

    let tokens: Vec<_> = tree.preorder().filter_map(Node::text).filter(|t| !t.is_empty()).collect();
    assert_eq!(tokens, ["2", "+", "3", "*", "4"]);

    let groups: Vec<_> = tree.preorder()
                             .filter(|node| node.name() == grammar::BINARY_GROUP)
                             .map(Node::span)
                             .collect();
    assert_eq!(groups, [Span::new(0, 9), Span::new(4, 9)]);
}

#[test]
fn alternative_span_equals_matched_child() {
    let grammar = arithmetic().unwrap();
    let tree = grammar.parse("12 + 3").unwrap();

    for node in tree.preorder() {
        if let Node::Alternative { child, .. } = node {
            assert_eq!(node.span(), child.span());
        }
    }

    let ints: Vec<_> = tree.preorder()
                           .filter(|node| node.name() == grammar::INT)
                           .map(Node::span)
                           .collect();
    assert_eq!(ints, [Span::new(0, 2), Span::new(5, 6)]);
}

#[test]
fn deepest_failure_is_reported() {
    let grammar = arithmetic().unwrap();

    let err = grammar.parse("(2 + 3").unwrap_err();
    assert_eq!(err,
               ParseError::UnexpectedEndOfInput { expected: grammar::RPAREN,
                                                  position: 6, });
    assert_eq!(grammar::classify(err), ParseError::MismatchedGroup { position: 6 });
}

#[test]
fn parse_errors_are_classified() {
    let calculator = Calculator::new().unwrap();

    assert_eq!(calculator.parse("2 + 3)").unwrap_err(),
               EvalError::Parse(ParseError::MismatchedGroup { position: 5 }));
    assert_eq!(calculator.parse("1 + abc").unwrap_err(),
               EvalError::Parse(ParseError::UnexpectedTrailingTokens { token:    "+ abc".to_string(),
                                                                       position: 2, }));
    assert!(matches!(calculator.parse("abc").unwrap_err(),
                     EvalError::Parse(ParseError::UnexpectedToken { position: 0, .. })));
}

#[test]
fn errors_point_at_their_position() {
    let calculator = Calculator::new().unwrap();

    assert_eq!(calculator.parse("(2 + 3").unwrap_err().position(), Some(6));
    assert_eq!(calculator.evaluate("1 + 4 / 0").unwrap_err().position(), Some(6));
    assert_eq!(ParseError::UndefinedRule { name: "Expr".to_string() }.position(), None);
}

#[test]
fn nested_parentheses_parse_in_linear_time() {
    let grammar = arithmetic().unwrap();
    let nested = format!("{}1{}", "(".repeat(40), ")".repeat(40));

    let started = Instant::now();
    let tree = grammar.parse(&nested).unwrap();
    assert!(started.elapsed() < Duration::from_secs(2),
            "parsing took {:?}",
            started.elapsed());

    let groups = tree.preorder().filter(|node| node.name() == grammar::PAR_EXPR).count();
    assert_eq!(groups, 40);
}

#[test]
fn rule_from_another_grammar_fails_to_match() {
    let mut small = GrammarBuilder::new();
    let int = small.terminal("Int", Lexeme::Int);
    let grammar = small.build(int).unwrap();

    let mut large = GrammarBuilder::new();
    large.terminal("Int", Lexeme::Int);
    large.terminal("Plus", Lexeme::Plus);
    let foreign = large.terminal("Minus", Lexeme::Minus);

    let failure = grammar.match_rule(foreign, "-", 0).unwrap_err();
    assert_eq!(failure,
               Failure { position: 0,
                         expected: "<unknown rule>", });
}

#[test]
fn calculator_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Calculator>();

    let calculator = Calculator::new().unwrap();
    std::thread::scope(|scope| {
        for n in 1..=4_i64 {
            let calculator = &calculator;
            scope.spawn(move || {
                     let value = calculator.evaluate(&format!("{n} * {n}")).unwrap();
                     assert_eq!(value, reckon::Value::Integer(n * n));
                 });
        }
    });
}
