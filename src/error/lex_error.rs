#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A character that starts no token.
    UnexpectedCharacter {
        /// The offending character.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
        /// The 1-based column of the character within its line.
        column:    usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character,
                                        line,
                                        column, } => write!(f,
                                                            "Unknown symbol '{character}' (line {line}, column {column})"),
        }
    }
}

impl std::error::Error for LexError {}

/// A character skipped by a lenient scan.
///
/// Lenient scanning does not abort on unknown input; it records one of these
/// for every skipped character and keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexDiagnostic {
    /// The skipped character.
    pub character: String,
    /// The source line of the character.
    pub line:      usize,
    /// The 1-based column of the character within its line.
    pub column:    usize,
}

impl std::fmt::Display for LexDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Skipped unknown symbol '{}' (line {}, column {})",
               self.character, self.line, self.column)
    }
}

impl From<LexDiagnostic> for LexError {
    fn from(value: LexDiagnostic) -> Self {
        Self::UnexpectedCharacter { character: value.character,
                                    line:      value.line,
                                    column:    value.column, }
    }
}
