/// Entry points and the precedence-climbing loop.
///
/// Contains `parse_tokens`, which turns a whole token sequence into one
/// expression tree, and `parse_expression`, the single recursive function,
/// parameterized by a minimum binding power, that is the entire grammar.
pub mod core;

/// Infix operators and their binding powers.
///
/// Holds the binding-power table as data, the implicit-multiplication rule,
/// and the lookup that classifies the token in operator position.
pub mod binary;

/// Prefix position.
///
/// Parses what can start an expression: literals, the `-` and `$` prefix
/// operators, and parenthesized groups.
pub mod unary;
