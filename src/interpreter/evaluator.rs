/// Core evaluation logic.
///
/// Contains the shunting-yard state machine that turns the pre-order node
/// sequence of a syntax tree into a value.
pub mod core;

/// The operator table.
///
/// Maps operator token names to precedence, associativity, arity and the
/// function that reduces their operands.
pub mod operator;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators that take two operands.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements the prefix sign operators.
pub mod unary;
