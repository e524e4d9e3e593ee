use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::PREFIX_BINDING_POWER,
            core::{ParseResult, parse_expression},
        },
    },
};

/// Parses the token in prefix position.
///
/// Grammar:
/// ```text
///     prefix := NUMBER | IDENT | PI | E
///             | ("-" | "$") expression(4.0)
///             | "(" expression(0) ")"
/// ```
/// Numbers, identifiers and keywords become literal nodes holding their
/// lexeme. The operand of a prefix operator is parsed above every infix
/// binding power, so `-3^2` negates only `3`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
/// - `depth`: Current nesting depth.
///
/// # Errors
/// [`ParseError::UnexpectedToken`] when the token cannot start an expression,
/// [`ParseError::ExpectedClosingParen`] for an unterminated group.
pub(crate) fn parse_prefix<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.next().ok_or_else(|| {
                                 ParseError::UnexpectedToken { token: TokenKind::Eof.to_string(),
                                                               line:  0, }
                             })?;

    match token.kind {
        TokenKind::Number | TokenKind::Ident | TokenKind::Pi | TokenKind::E => {
            Ok(Expr::literal(token.lexeme.as_str(), token.line))
        },
        TokenKind::Minus => parse_unary(tokens, UnaryOperator::Negate, token.line, depth),
        TokenKind::Sqrt => parse_unary(tokens, UnaryOperator::Sqrt, token.line, depth),
        TokenKind::OpenParen => parse_grouping(tokens, token.line, depth),
        _ => Err(ParseError::UnexpectedToken { token: token.describe(),
                                               line:  token.line, }),
    }
}

fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                      op: UnaryOperator,
                      line: usize,
                      depth: usize)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let operand = parse_expression(tokens, PREFIX_BINDING_POWER, depth + 1)?;
    Ok(Expr::unary(op, operand, line))
}

/// Parses the inside of `( ... )` after the opening parenthesis.
///
/// The group restarts at binding power zero; the loop inside stops at the
/// closing parenthesis, which must come next.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens, 0.0, depth + 1)?;

    match tokens.next() {
        Some(Token { kind: TokenKind::CloseParen,
                     .. }) => Ok(expr),
        Some(token) => Err(ParseError::ExpectedClosingParen { line: token.line }),
        None => Err(ParseError::ExpectedClosingParen { line }),
    }
}
