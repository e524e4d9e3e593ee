/// Lexical errors.
///
/// Defines the failure raised for a character the tokenizer does not
/// recognize, and the non-fatal diagnostic recorded for it when scanning
/// leniently.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all syntax errors that can occur while building an expression tree
/// from tokens: unexpected tokens in prefix position, unrecognized infix
/// operators, missing closing parentheses and trailing input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero or an identifier with no numeric meaning.
pub mod runtime_error;

pub use lex_error::{LexDiagnostic, LexError};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any failure of the line pipeline.
///
/// Each stage has its own error type; this enum lets `?` carry the first one
/// encountered out of [`crate::evaluate_line`].
pub enum Error {
    /// The tokenizer rejected a character.
    Lex(LexError),
    /// The parser rejected the token sequence.
    Parse(ParseError),
    /// The evaluator hit a numeric failure.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
