/// The evaluator module reduces syntax trees to values.
///
/// The evaluator walks the pre-order node sequence of a parsed expression,
/// regroups operators by precedence and associativity with the
/// shunting-yard algorithm, and applies them to numeric values.
///
/// # Responsibilities
/// - Drives the operator and operand stacks.
/// - Defines the operator table and the arithmetic of every operator.
/// - Reports runtime errors such as division by zero or invalid literals.
pub mod evaluator;
/// The lexer module recognizes the lexemes of arithmetic expressions.
///
/// Terminal matchers of the grammar engine probe the source one lexeme at a
/// time: numbers, parentheses, operator symbols and whitespace.
pub mod lexer;
/// The parser module turns text into a syntax tree.
///
/// It contains a generic grammar engine built from terminal, sequence and
/// alternative matchers, the arithmetic grammar composed from it, and the
/// syntax tree the engine produces.
///
/// # Responsibilities
/// - Matches source text against a grammar with position tracking.
/// - Reports the deepest failure when nothing matches.
/// - Builds labeled, span-annotated syntax trees.
pub mod parser;
/// The value module defines the numeric runtime values.
///
/// Values are either 64-bit integers or 64-bit floats; the module provides
/// conversion and promotion helpers between the two.
pub mod value;
