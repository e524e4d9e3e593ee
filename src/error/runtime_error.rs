#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier was evaluated; identifiers carry no value.
    UnknownIdentifier {
        /// The identifier as written.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A literal whose text is not a number.
    InvalidNumber {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DivisionByZero { line }
            | Self::UnknownIdentifier { line, .. }
            | Self::InvalidNumber { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { line } => write!(f, "Division by zero (line {line})"),
            Self::UnknownIdentifier { name, line } => {
                write!(f, "Unknown identifier '{name}' (line {line})")
            },
            Self::InvalidNumber { text, line } => {
                write!(f, "'{text}' is not a valid number (line {line})")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
