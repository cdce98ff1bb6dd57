/// Parsing errors.
///
/// Defines all error types that can occur while matching source text against
/// a grammar or while building a grammar. Parse errors include unexpected
/// characters, premature end of input, unbalanced parentheses and unconsumed
/// trailing input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing a syntax tree
/// to a value. Runtime errors include division by zero, invalid literals,
/// operand type mismatches and violated evaluator stack invariants.
pub mod runtime_error;
/// Crate-level error.
///
/// Wraps parse and runtime errors behind a single type and classifies every
/// failure into an [`ErrorKind`].
pub mod eval_error;

pub use eval_error::{ErrorKind, EvalError};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
