//! # reckon
//!
//! reckon is an arithmetic expression evaluator written in Rust.
//! It parses expressions with a small composable grammar engine and reduces
//! the resulting syntax tree with a shunting-yard evaluator that mixes
//! integer and floating-point arithmetic.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::Evaluator,
    parser::{
        core::Grammar,
        grammar::{arithmetic, classify},
        node::Node,
    },
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while building a
/// grammar, parsing an expression, or evaluating its syntax tree, together
/// with the crate-level [`EvalError`] and its [`ErrorKind`] classification.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (grammar, parser, evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates parsing and evaluation.
///
/// This module ties together the lexer, the grammar engine, the arithmetic
/// grammar, the syntax tree, the evaluator and the value representation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use error::{ErrorKind, EvalError};
pub use interpreter::value::Value;

/// Evaluates arithmetic expressions against a grammar built once.
///
/// The grammar is immutable after construction, so a single calculator can
/// be shared freely, including across threads.
pub struct Calculator {
    grammar: Grammar,
}

impl Calculator {
    /// Builds the arithmetic grammar.
    ///
    /// # Errors
    /// Returns an error of kind [`ErrorKind::MalformedGrammar`] if the grammar
    /// cannot be built.
    pub fn new() -> Result<Self, EvalError> {
        Ok(Self { grammar: arithmetic()? })
    }

    /// Parses an expression into its syntax tree without evaluating it.
    ///
    /// # Errors
    /// Returns an error of kind [`ErrorKind::Syntax`] if the whole input is
    /// not one expression.
    pub fn parse<'src>(&self, expression: &'src str) -> Result<Node<'src>, EvalError> {
        Ok(self.grammar.parse(expression).map_err(classify)?)
    }

    /// Evaluates an expression.
    ///
    /// The whole input must be one expression, optionally surrounded by
    /// whitespace. Evaluation stops at the first failure.
    ///
    /// # Example
    /// ```
    /// use reckon::{Calculator, ErrorKind, Value};
    ///
    /// let calculator = Calculator::new().unwrap();
    ///
    /// assert_eq!(calculator.evaluate("2 + 3 * 4").unwrap(), Value::Integer(14));
    /// assert_eq!(calculator.evaluate("1.0 + 2").unwrap(), Value::Real(3.0));
    ///
    /// let err = calculator.evaluate("1 + abc").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    pub fn evaluate(&self, expression: &str) -> Result<Value, EvalError> {
        let tree = self.parse(expression)?;
        Ok(Evaluator::eval_tree(&tree)?)
    }
}

/// Evaluates a single expression.
///
/// Builds a fresh grammar for the call; use [`Calculator`] to evaluate many
/// expressions with one grammar.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use reckon::{ErrorKind, Value, evaluate};
///
/// assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), Value::Integer(512));
/// assert_eq!(evaluate("2.0 / 0").unwrap(), Value::Real(f64::INFINITY));
///
/// let err = evaluate("2 / 0").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate(expression: &str) -> Result<Value, EvalError> {
    Calculator::new()?.evaluate(expression)
}
