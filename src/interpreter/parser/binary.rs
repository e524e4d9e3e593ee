use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// The binding powers of one operator.
///
/// Higher binds tighter. An operator whose left power is below its right
/// power is left-associative; the reverse makes it right-associative.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BindingPower {
    /// How strongly the operator pulls on the expression to its left.
    pub left:  f64,
    /// The floor at which the operand to its right is parsed.
    pub right: f64,
}

impl BindingPower {
    /// Whether chains of this operator group to the left.
    ///
    /// # Example
    /// ```
    /// use prattle::interpreter::parser::binary::{IMPLICIT_MULTIPLICATION, infix_binding_power};
    /// use prattle::interpreter::lexer::TokenKind;
    ///
    /// let (_, minus) = infix_binding_power(TokenKind::Minus).unwrap();
    /// let (_, caret) = infix_binding_power(TokenKind::Caret).unwrap();
    ///
    /// assert!(minus.is_left_associative());
    /// assert!(!caret.is_left_associative());
    /// assert!(IMPLICIT_MULTIPLICATION.is_left_associative());
    /// ```
    #[must_use]
    pub const fn is_left_associative(self) -> bool {
        self.left < self.right
    }
}

/// Every explicit infix operator: its token, the node operator it builds, and
/// its binding powers.
pub const INFIX_OPERATORS: [(TokenKind, BinaryOperator, BindingPower); 5] =
    [(TokenKind::Plus, BinaryOperator::Add, BindingPower { left: 1.0, right: 1.1 }),
     (TokenKind::Minus, BinaryOperator::Sub, BindingPower { left: 1.0, right: 1.1 }),
     (TokenKind::Star, BinaryOperator::Mul, BindingPower { left: 2.0, right: 2.1 }),
     (TokenKind::Slash, BinaryOperator::Div, BindingPower { left: 2.0, right: 2.1 }),
     (TokenKind::Caret, BinaryOperator::Pow, BindingPower { left: 3.1, right: 3.0 })];

/// The binding powers of a multiplication synthesized between two adjacent
/// operands. It binds tighter than `*` and `/`, so `1/2x` is `1/(2x)`.
pub const IMPLICIT_MULTIPLICATION: BindingPower = BindingPower { left:  2.5,
                                                                 right: 2.6, };

/// The floor at which the operand of `-` and `$` is parsed, above every infix
/// left binding power.
pub const PREFIX_BINDING_POWER: f64 = 4.0;

/// Tokens that, found in operator position, start the right operand of an
/// implicit multiplication.
pub const IMPLICIT_OPERANDS: [TokenKind; 6] = [TokenKind::Number,
                                               TokenKind::Ident,
                                               TokenKind::OpenParen,
                                               TokenKind::Pi,
                                               TokenKind::E,
                                               TokenKind::Sqrt];

/// An operator found in infix position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Infix {
    /// The operator to build.
    pub op:       BinaryOperator,
    /// Its binding powers.
    pub power:    BindingPower,
    /// Whether the operator was synthesized; no token is consumed for it.
    pub implicit: bool,
}

/// Looks up an explicit infix operator token in [`INFIX_OPERATORS`].
///
/// # Example
/// ```
/// use prattle::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::infix_binding_power},
/// };
///
/// let (op, power) = infix_binding_power(TokenKind::Star).unwrap();
/// assert_eq!(op, BinaryOperator::Mul);
/// assert_eq!((power.left, power.right), (2.0, 2.1));
///
/// assert!(infix_binding_power(TokenKind::Equals).is_none());
/// ```
#[must_use]
pub fn infix_binding_power(kind: TokenKind) -> Option<(BinaryOperator, BindingPower)> {
    INFIX_OPERATORS.iter()
                   .find(|(token, ..)| *token == kind)
                   .map(|&(_, op, power)| (op, power))
}

/// Returns `true` when a token in operator position begins an operand, which
/// makes the position an implicit multiplication.
#[must_use]
pub fn starts_implicit_operand(kind: TokenKind) -> bool {
    IMPLICIT_OPERANDS.contains(&kind)
}

/// Classifies the token in operator position without consuming it.
///
/// An operand-starting token yields an implicit multiplication; an infix
/// operator token yields that operator.
///
/// # Errors
/// [`ParseError::UnrecognizedOperator`] for any other token, such as `=`.
pub fn infix_operator(token: &Token) -> ParseResult<Infix> {
    if starts_implicit_operand(token.kind) {
        return Ok(Infix { op:       BinaryOperator::Mul,
                          power:    IMPLICIT_MULTIPLICATION,
                          implicit: true, });
    }

    infix_binding_power(token.kind).map(|(op, power)| Infix { op,
                                                              power,
                                                              implicit: false })
                                   .ok_or_else(|| ParseError::UnrecognizedOperator { token: token.describe(),
                                                                                     line:  token.line, })
}
