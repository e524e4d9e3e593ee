use logos::Logos;

use crate::error::{LexDiagnostic, LexError};

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// The closed set of token kinds the parser understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input; always the last token of a scan.
    Eof,
    /// An identifier that is not a keyword, such as `x`.
    Ident,
    /// Numeric literal, such as `3` or `2.5`.
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `$`, the square root prefix.
    Sqrt,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `=`; scanned but accepted nowhere by the grammar.
    Equals,
    /// The `pi` keyword.
    Pi,
    /// The `e` keyword.
    E,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Eof => "EOF",
            Self::Ident => "Identifier",
            Self::Number => "Number",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::Sqrt => "$",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::Equals => "=",
            Self::Pi => "pi",
            Self::E => "e",
        };
        write!(f, "{name}")
    }
}

/// The value a token carries besides its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The parsed value of a `Number` token.
    Number(f64),
    /// The text of an identifier or keyword token.
    Text(String),
}

/// A lexical token: a minimal but meaningful unit of source text.
///
/// Tokens are immutable once scanned. `lexeme` is the exact source slice, so
/// number literals keep their written form (`2.50` stays `2.50`).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The source text of the token; empty for `Eof`.
    pub lexeme:  String,
    /// The literal value, for numbers, identifiers and keywords.
    pub literal: Option<Literal>,
    /// The 1-based line the token starts on.
    pub line:    usize,
}

impl Token {
    /// How the token is named in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::Eof {
            self.kind.to_string()
        } else {
            self.lexeme.clone()
        }
    }
}

/// What the scanner does with a character that starts no token.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum UnknownCharPolicy {
    /// Fail the scan with [`LexError::UnexpectedCharacter`].
    #[default]
    Reject,
    /// Skip the character, record a [`LexDiagnostic`] and keep scanning.
    Skip,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and where that line starts, for token
/// positions and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset at which the current line starts.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// The raw token grammar. Keywords are plain `token` rules: logos prefers
/// the longest match, so `pie` is still one identifier.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
enum RawToken {
    #[regex(r"[0-9]+")]
    #[regex(r"[0-9]+\.[0-9]+")]
    Number,
    // A two-letter literal already outranks the identifier pattern.
    #[token("pi")]
    Pi,
    // A one-letter literal ties with it, so the keyword needs the edge.
    #[token("e", priority = 3)]
    E,
    #[regex(r"[a-zA-Z_][a-zA-Z]*")]
    Ident,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("$")]
    Sqrt,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("=")]
    Equals,
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

impl RawToken {
    /// Maps a produced raw token onto its public kind. Trivia never reaches
    /// this point because its rules skip.
    const fn kind(self) -> Option<TokenKind> {
        match self {
            Self::Number => Some(TokenKind::Number),
            Self::Pi => Some(TokenKind::Pi),
            Self::E => Some(TokenKind::E),
            Self::Ident => Some(TokenKind::Ident),
            Self::Plus => Some(TokenKind::Plus),
            Self::Minus => Some(TokenKind::Minus),
            Self::Star => Some(TokenKind::Star),
            Self::Slash => Some(TokenKind::Slash),
            Self::Caret => Some(TokenKind::Caret),
            Self::Sqrt => Some(TokenKind::Sqrt),
            Self::OpenParen => Some(TokenKind::OpenParen),
            Self::CloseParen => Some(TokenKind::CloseParen),
            Self::Equals => Some(TokenKind::Equals),
            Self::NewLine | Self::Ignored => None,
        }
    }
}

/// A single left-to-right pass over one source string.
///
/// The scanner owns its cursor (inside the wrapped `logos` lexer) and its
/// line counter, so two scans never share position state. It yields one item
/// per token or unknown character, and a final `Eof` token.
pub struct Scanner<'src> {
    lexer:    logos::Lexer<'src, RawToken>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    RawToken::lexer_with_extras(source, LexerExtras::default()),
               finished: false, }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        let lexeme = self.lexer.slice();
        let literal = match kind {
            TokenKind::Number => lexeme.parse().ok().map(Literal::Number),
            TokenKind::Ident | TokenKind::Pi | TokenKind::E => {
                Some(Literal::Text(lexeme.to_string()))
            },
            _ => None,
        };

        Token { kind,
                lexeme: lexeme.to_string(),
                literal,
                line: self.lexer.extras.line }
    }

    fn eof(&self) -> Token {
        Token { kind:    TokenKind::Eof,
                lexeme:  String::new(),
                literal: None,
                line:    self.lexer.extras.line, }
    }

    fn diagnostic(&self) -> LexDiagnostic {
        let source = self.lexer.source();
        let start = self.lexer.span().start;
        let line_start = self.lexer.extras.line_start.min(start);

        let column = source.get(line_start..start)
                           .map_or(1, |prefix| prefix.chars().count() + 1);
        let character = source.get(start..)
                              .and_then(|rest| rest.chars().next())
                              .unwrap_or(char::REPLACEMENT_CHARACTER);

        LexDiagnostic { character: character.to_string(),
                        line: self.lexer.extras.line,
                        column }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexDiagnostic>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.lexer.next() {
                Some(Ok(raw)) => {
                    if let Some(kind) = raw.kind() {
                        return Some(Ok(self.make_token(kind)));
                    }
                },
                Some(Err(())) => return Some(Err(self.diagnostic())),
                None => {
                    self.finished = true;
                    return Some(Ok(self.eof()));
                },
            }
        }
    }
}

/// Scans `source` under the given policy.
///
/// Returns the tokens, terminated by exactly one `Eof` token, together with
/// the characters skipped along the way (always empty for
/// [`UnknownCharPolicy::Reject`]).
///
/// # Errors
/// With [`UnknownCharPolicy::Reject`], the first unknown character fails the
/// scan.
pub fn scan(source: &str, policy: UnknownCharPolicy) -> LexResult<(Vec<Token>, Vec<LexDiagnostic>)> {
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();

    for item in Scanner::new(source) {
        match item {
            Ok(token) => tokens.push(token),
            Err(diagnostic) => match policy {
                UnknownCharPolicy::Reject => return Err(diagnostic.into()),
                UnknownCharPolicy::Skip => diagnostics.push(diagnostic),
            },
        }
    }

    Ok((tokens, diagnostics))
}

/// Converts source text into tokens, failing on the first unknown character.
///
/// The returned sequence always ends with exactly one `Eof` token.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] for a character that starts no
/// token.
///
/// # Example
/// ```
/// use prattle::interpreter::lexer::{TokenKind, scan_tokens};
///
/// let kinds: Vec<_> = scan_tokens("2(pi)").unwrap().iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::OpenParen,
///             TokenKind::Pi,
///             TokenKind::CloseParen,
///             TokenKind::Eof]);
///
/// assert!(scan_tokens("1 # 2").is_err());
/// ```
pub fn scan_tokens(source: &str) -> LexResult<Vec<Token>> {
    Scanner::new(source).collect::<Result<Vec<_>, _>>()
                        .map_err(LexError::from)
}

/// Converts source text into tokens, skipping unknown characters.
///
/// Every skipped character is reported as a [`LexDiagnostic`]; the tokens
/// around it are kept.
///
/// # Example
/// ```
/// use prattle::interpreter::lexer::scan_tokens_lenient;
///
/// let (tokens, diagnostics) = scan_tokens_lenient("1 # 2");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(diagnostics[0].column, 3);
/// ```
#[must_use]
pub fn scan_tokens_lenient(source: &str) -> (Vec<Token>, Vec<LexDiagnostic>) {
    Scanner::new(source).fold((Vec::new(), Vec::new()), |(mut tokens, mut diagnostics), item| {
                            match item {
                                Ok(token) => tokens.push(token),
                                Err(diagnostic) => diagnostics.push(diagnostic),
                            }
                            (tokens, diagnostics)
                        })
}
