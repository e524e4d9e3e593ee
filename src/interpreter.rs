/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the tree produced by the parser, interprets literals
/// and keyword constants, and applies unary and binary operators.
///
/// # Responsibilities
/// - Evaluates every node shape; matching is exhaustive.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each corresponding to a number, identifier, keyword, operator or
/// parenthesis, terminated by one end-of-input token.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line positions.
/// - Recognizes the `pi` and `e` keywords.
/// - Rejects, or skips with a diagnostic, characters that start no token.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// Parsing is precedence climbing driven by a table of binding powers, with
/// multiplication synthesized between adjacent operands.
///
/// # Responsibilities
/// - Converts tokens into one expression tree.
/// - Resolves precedence and associativity from the binding-power table.
/// - Reports syntax errors with line information.
pub mod parser;
/// The printer module renders an expression tree as canonical text.
pub mod printer;
