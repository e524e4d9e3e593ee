use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::infix_operator, unary::parse_prefix},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply groups, prefix operators and right operands may nest before
/// parsing gives up instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The most tokens one line may hold, `Eof` included.
///
/// Every tree node is built from at least one token or sits between two
/// adjacent operands, so a tree is never taller than its token count. Left
/// spines (`1 + 1 + ...`, `1 1 1 ...`) grow without adding nesting depth, so
/// this is what keeps evaluating, printing and dropping such a tree within a
/// default 2 MiB thread stack.
pub const MAX_TOKENS: usize = 1024;

/// Parses a complete token sequence into a single expression tree.
///
/// The sequence is expected to end with an `Eof` token, as produced by the
/// lexer. The infix loop stops at `)`, so a closing parenthesis with no
/// matching group is reported here as trailing input.
///
/// # Errors
/// Any syntax error found while parsing,
/// [`ParseError::UnexpectedTrailingTokens`] if tokens remain afterwards, or
/// [`ParseError::TooManyTokens`] past [`MAX_TOKENS`].
///
/// # Example
/// ```
/// use prattle::interpreter::{lexer::scan_tokens, parser::core::parse_tokens};
///
/// let tokens = scan_tokens("1 + 2 * 3").unwrap();
/// let tree = parse_tokens(&tokens).unwrap();
/// assert_eq!(tree.to_string(), "(1 + (2 * 3))");
///
/// let tokens = scan_tokens("1 + 2)").unwrap();
/// assert!(parse_tokens(&tokens).is_err());
/// ```
pub fn parse_tokens(tokens: &[Token]) -> ParseResult<Expr> {
    if tokens.len() > MAX_TOKENS {
        let line = tokens.get(MAX_TOKENS).map_or(1, |token| token.line);
        return Err(ParseError::TooManyTokens { count: tokens.len(),
                                               limit: MAX_TOKENS,
                                               line });
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0.0, 0)?;

    match iter.next() {
        None | Some(Token { kind: TokenKind::Eof,
                            .. }) => Ok(expr),
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { token: token.describe(),
                                                                  line:  token.line, }),
    }
}

/// Parses an expression whose operators all bind at least as tightly as
/// `min_bp`.
///
/// This is precedence climbing: one token is parsed in prefix position, then
/// the loop keeps absorbing infix operators, explicit or implicit, while
/// their left binding power reaches `min_bp`. Each operator parses its right
/// operand recursively at its right binding power, which is what makes
/// `left < right` left-associative and `left > right` right-associative.
///
/// The loop ends at `Eof`, at `)` (left for the enclosing group), or at an
/// operator that binds too loosely for this level.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `min_bp`: The binding-power floor of this level.
/// - `depth`: Current nesting depth.
///
/// # Errors
/// Propagates prefix and operator errors, and fails with
/// [`ParseError::NestingTooDeep`] past [`MAX_NESTING_DEPTH`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               min_bp: f64,
                               depth: usize)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if depth > MAX_NESTING_DEPTH {
        let line = tokens.peek().map_or(0, |token| token.line);
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                line });
    }

    let mut left = parse_prefix(tokens, depth)?;

    while let Some(&token) = tokens.peek() {
        if matches!(token.kind, TokenKind::Eof | TokenKind::CloseParen) {
            break;
        }

        let infix = infix_operator(token)?;
        if infix.power.left < min_bp {
            break;
        }

        // An implicit multiplication has no token of its own to consume.
        if !infix.implicit {
            tokens.next();
        }

        let right = parse_expression(tokens, infix.power.right, depth + 1)?;
        left = Expr::binary(left, infix.op, right, token.line);
    }

    Ok(left)
}
