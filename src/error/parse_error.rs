#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing or building a grammar.
pub enum ParseError {
    /// Found a character where no grammar rule matches.
    UnexpectedToken {
        /// The rule that was expected at the failure position.
        expected: &'static str,
        /// The character encountered.
        found:    String,
        /// Byte offset where matching stopped.
        position: usize,
    },
    /// Reached the end of input while a rule still expected more.
    UnexpectedEndOfInput {
        /// The rule that was expected at the end of input.
        expected: &'static str,
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A parenthesis has no matching counterpart.
    MismatchedGroup {
        /// Byte offset where the imbalance was detected.
        position: usize,
    },
    /// Found extra input after a complete expression.
    UnexpectedTrailingTokens {
        /// The unconsumed remainder of the input.
        token:    String,
        /// Byte offset where the remainder starts.
        position: usize,
    },
    /// A grammar rule was referenced but never defined.
    UndefinedRule {
        /// The name (or index) of the rule.
        name: String,
    },
}

impl ParseError {
    /// Returns the byte offset the error is anchored to, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::MismatchedGroup { position }
            | Self::UnexpectedTrailingTokens { position, .. } => Some(*position),
            Self::UndefinedRule { .. } => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Error at position {position}: Unexpected '{found}', expected {expected}."),

            Self::UnexpectedEndOfInput { expected, position } => write!(f,
                                                                        "Error at position {position}: Unexpected end of input, expected {expected}."),

            Self::MismatchedGroup { position } => {
                write!(f, "Error at position {position}: Mismatched parenthesis.")
            },

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at position {position}: Extra input after expression: {token}"),

            Self::UndefinedRule { name } => {
                write!(f, "Grammar error: Rule '{name}' is referenced but never defined.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
