#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A token that cannot begin an expression was found in prefix position.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A token in operator position is not an infix operator.
    UnrecognizedOperator {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The line holds more tokens than the parser accepts.
    TooManyTokens {
        /// The number of tokens in the line.
        count: usize,
        /// The maximum number of tokens.
        limit: usize,
        /// The line of the first token past the limit.
        line:  usize,
    },
    /// Groups, prefix operators or right operands nested past the limit.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnrecognizedOperator { line, .. }
            | Self::ExpectedClosingParen { line }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::TooManyTokens { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Unexpected token in prefix position: '{token}' (line {line})")
            },

            Self::UnrecognizedOperator { token, line } => {
                write!(f, "Unrecognized operator: '{token}' (line {line})")
            },

            Self::ExpectedClosingParen { line } => {
                write!(f, "Group missing closing parenthesis ')' (line {line})")
            },

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Extra tokens after expression, starting at '{token}' (line {line})"),

            Self::TooManyTokens { count, limit, line } => {
                write!(f, "Input has {count} tokens, more than the limit of {limit} (line {line})")
            },

            Self::NestingTooDeep { limit, line } => {
                write!(f, "Expression nests deeper than {limit} levels (line {line})")
            },
        }
    }
}

impl std::error::Error for ParseError {}
