use crate::{
    error::ParseError,
    interpreter::{
        lexer::Lexeme,
        parser::core::{Grammar, GrammarBuilder, Matcher, ParseResult},
    },
};

/// Zero or more blanks.
pub const WS: &str = "WS";
/// `'(' WS Expr WS ')'`
pub const PAR_EXPR: &str = "ParExpr";
/// `(`
pub const LPAREN: &str = "LParen";
/// `)`
pub const RPAREN: &str = "RParen";
/// The whole input: `WS Expr WS`.
pub const INPUT: &str = "Input";
/// `BinaryGroup | UnaryGroup | Primary`
pub const EXPR: &str = "Expr";
/// `ParExpr | Number`
pub const PRIMARY: &str = "Primary";
/// `UnOp WS Primary`
pub const UNARY_GROUP: &str = "UnaryGroup";
/// `Operand WS BiOp WS Expr`
pub const BINARY_GROUP: &str = "BinaryGroup";
/// `UnaryGroup | Primary`
pub const OPERAND: &str = "Operand";
/// `Float | Int`
pub const NUMBER: &str = "Number";
/// Floating-point literal.
pub const FLOAT: &str = "Float";
/// Integer literal.
pub const INT: &str = "Int";
/// `UnPlus | UnMinus`
pub const UN_OP: &str = "UnOp";
/// Unary `+`.
pub const UN_PLUS: &str = "UnPlus";
/// Unary `-`.
pub const UN_MINUS: &str = "UnMinus";
/// `BiPlus | BiMinus | Mul | Div | Pow`
pub const BI_OP: &str = "BiOp";
/// Binary `+`.
pub const BI_PLUS: &str = "BiPlus";
/// Binary `-`.
pub const BI_MINUS: &str = "BiMinus";
/// `*`
pub const MUL: &str = "Mul";
/// `/`
pub const DIV: &str = "Div";
/// `^`
pub const POW: &str = "Pow";

/// Builds the grammar of arithmetic expressions.
///
/// The grammar decides only what is syntactically an expression. Every
/// binary operator is accepted at every level with the same right-leaning
/// shape, so `2 + 3 * 4` parses as `2 + (3 * 4)` and `2 * 3 + 4` as
/// `2 * (3 + 4)`; grouping by precedence is left to the evaluator.
///
/// ```text
/// Input       := WS Expr WS
/// Expr        := BinaryGroup | UnaryGroup | Primary
/// BinaryGroup := Operand WS BiOp WS Expr
/// Operand     := UnaryGroup | Primary
/// UnaryGroup  := UnOp WS Primary
/// Primary     := ParExpr | Number
/// ParExpr     := '(' WS Expr WS ')'
/// Number      := Float | Int
/// ```
///
/// # Errors
/// Returns `ParseError::UndefinedRule` if a rule is left undefined.
///
/// # Example
/// ```
/// use reckon::interpreter::parser::grammar::{BINARY_GROUP, INT, arithmetic};
///
/// let grammar = arithmetic().unwrap();
/// let tree = grammar.parse("2 + 3 * 4").unwrap();
///
/// let names: Vec<_> = tree.preorder().map(|node| node.name()).collect();
/// assert_eq!(names.iter().filter(|name| **name == BINARY_GROUP).count(), 2);
/// assert_eq!(names.iter().filter(|name| **name == INT).count(), 3);
/// ```
pub fn arithmetic() -> ParseResult<Grammar> {
    let mut g = GrammarBuilder::new();

    let ws = g.optional(WS, Lexeme::Whitespace);
    let expr = g.declare(EXPR);

    let lparen = g.terminal(LPAREN, Lexeme::LParen);
    let rparen = g.terminal(RPAREN, Lexeme::RParen);
    let par_expr = g.sequence(PAR_EXPR, [lparen, ws, expr, ws, rparen]);

    // Float first: `12.5` must not stop after `12`.
    let float = g.terminal(FLOAT, Lexeme::Float);
    let int = g.terminal(INT, Lexeme::Int);
    let number = g.alternative(NUMBER, [float, int]);
    let primary = g.alternative(PRIMARY, [par_expr, number]);

    let un_plus = g.terminal(UN_PLUS, Lexeme::Plus);
    let un_minus = g.terminal(UN_MINUS, Lexeme::Minus);
    let un_op = g.alternative(UN_OP, [un_plus, un_minus]);
    let unary_group = g.sequence(UNARY_GROUP, [un_op, ws, primary]);

    let bi_plus = g.terminal(BI_PLUS, Lexeme::Plus);
    let bi_minus = g.terminal(BI_MINUS, Lexeme::Minus);
    let mul = g.terminal(MUL, Lexeme::Star);
    let div = g.terminal(DIV, Lexeme::Slash);
    let pow = g.terminal(POW, Lexeme::Caret);
    let bi_op = g.alternative(BI_OP, [bi_plus, bi_minus, mul, div, pow]);

    let operand = g.alternative(OPERAND, [unary_group, primary]);
    let binary_group = g.sequence(BINARY_GROUP, [operand, ws, bi_op, ws, expr]);

    g.define(expr, Matcher::Alternative(vec![binary_group, unary_group, primary]));

    let input = g.sequence(INPUT, [ws, expr, ws]);
    g.build(input)
}

/// Refines a generic parse error with knowledge of parentheses.
///
/// A failure that stopped while expecting `)`, and trailing input that starts
/// with `)`, both mean the parentheses are unbalanced.
#[must_use]
pub fn classify(error: ParseError) -> ParseError {
    match error {
        ParseError::UnexpectedToken { expected: RPAREN,
                                      position,
                                      .. }
        | ParseError::UnexpectedEndOfInput { expected: RPAREN,
                                             position, } => {
            ParseError::MismatchedGroup { position }
        },
        ParseError::UnexpectedTrailingTokens { token, position } if token.starts_with(')') => {
            ParseError::MismatchedGroup { position }
        },
        other => other,
    }
}
