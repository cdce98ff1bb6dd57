use crate::error::{ParseError, RuntimeError};

/// Classifies failures into the categories callers can act on.
///
/// The human-readable message of an error is not stable; the kind is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not a well-formed expression. Covers unbalanced
    /// parentheses and unconsumed trailing input.
    Syntax,
    /// A number token could not be converted to a value.
    InvalidLiteral,
    /// An operation received a value variant it does not define.
    UnsupportedOperandType,
    /// Integer division by zero.
    DivisionByZero,
    /// An evaluator stack invariant was violated.
    MalformedStackState,
    /// A grammar was built with undefined rules.
    MalformedGrammar,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Syntax => "SyntaxError",
            Self::InvalidLiteral => "InvalidLiteral",
            Self::UnsupportedOperandType => "UnsupportedOperandType",
            Self::DivisionByZero => "DivisionByZero",
            Self::MalformedStackState => "MalformedStackState",
            Self::MalformedGrammar => "MalformedGrammar",
        };
        write!(f, "{name}")
    }
}

/// Any failure produced while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The input could not be parsed.
    Parse(ParseError),
    /// The syntax tree could not be reduced to a value.
    Runtime(RuntimeError),
}

impl EvalError {
    /// Returns the byte offset in the expression the error points at, if
    /// it has one.
    ///
    /// # Example
    /// ```
    /// use reckon::evaluate;
    ///
    /// assert_eq!(evaluate("1 + abc").unwrap_err().position(), Some(2));
    /// assert_eq!(evaluate("7 / 0").unwrap_err().position(), Some(2));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }

    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use reckon::{ErrorKind, evaluate};
    ///
    /// let err = evaluate("2 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    ///
    /// let err = evaluate("(2 + 3").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::UndefinedRule { .. }) => ErrorKind::MalformedGrammar,
            Self::Parse(_) | Self::Runtime(RuntimeError::MismatchedGroup { .. }) => {
                ErrorKind::Syntax
            },
            Self::Runtime(RuntimeError::InvalidLiteral { .. }) => ErrorKind::InvalidLiteral,
            Self::Runtime(RuntimeError::TypeError { .. }) => ErrorKind::UnsupportedOperandType,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::MissingOperands { .. }
                          | RuntimeError::MissingGroupMarker
                          | RuntimeError::UnevaluatedOperators { .. }
                          | RuntimeError::UnevaluatedOperands { .. }) => {
                ErrorKind::MalformedStackState
            },
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
