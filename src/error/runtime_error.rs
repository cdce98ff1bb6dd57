#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a syntax tree.
pub enum RuntimeError {
    /// A number token could not be converted to a value.
    InvalidLiteral {
        /// The literal text.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details:  String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Attempted integer division by zero.
    DivisionByZero {
        /// Byte offset of the division operator.
        position: usize,
    },
    /// A closing parenthesis had no opening counterpart on the operator stack.
    MismatchedGroup {
        /// Byte offset of the closing parenthesis.
        position: usize,
    },
    /// An operator was applied with fewer operands than its arity.
    MissingOperands {
        /// The name of the operator.
        operator: &'static str,
        /// Number of operands the operator needs.
        expected: usize,
        /// Number of operands that were available.
        found:    usize,
        /// Byte offset of the operator.
        position: usize,
    },
    /// The operator stack was drained without reaching a group marker.
    MissingGroupMarker,
    /// Operators remained on the stack after the final drain.
    UnevaluatedOperators {
        /// How many entries remained.
        count: usize,
    },
    /// The operand stack did not hold exactly one value at the end.
    UnevaluatedOperands {
        /// How many values remained.
        count: usize,
    },
}

impl RuntimeError {
    /// Returns the byte offset the error is anchored to, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidLiteral { position, .. }
            | Self::TypeError { position, .. }
            | Self::DivisionByZero { position }
            | Self::MismatchedGroup { position }
            | Self::MissingOperands { position, .. } => Some(*position),
            Self::MissingGroupMarker
            | Self::UnevaluatedOperators { .. }
            | Self::UnevaluatedOperands { .. } => None,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLiteral { literal, position } => write!(f,
                                                                 "Error at position {position}: Invalid numeric literal '{literal}'."),
            Self::TypeError { details, position } => {
                write!(f, "Error at position {position}: Type error: {details}.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::MismatchedGroup { position } => {
                write!(f, "Error at position {position}: Mismatched parenthesis.")
            },
            Self::MissingOperands { operator,
                                    expected,
                                    found,
                                    position, } => write!(f,
                                                          "Error at position {position}: Operator {operator} expected {expected} operands, but found {found}."),
            Self::MissingGroupMarker => {
                write!(f, "Internal error: Operator stack drained without a group marker.")
            },
            Self::UnevaluatedOperators { count } => {
                write!(f, "Internal error: {count} unevaluated operators remained.")
            },
            Self::UnevaluatedOperands { count } => {
                write!(f, "Internal error: Expected exactly one result, but {count} operands remained.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
