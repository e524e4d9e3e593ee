use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Keywords with a numeric meaning, and that meaning.
pub const KEYWORD_CONSTANTS: [(&str, f64); 2] =
    [("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Evaluates an expression tree to a number.
///
/// Evaluation is a pure, depth-first walk: both operands of a binary node are
/// evaluated, left first, before the operator is applied. The first error
/// aborts the walk.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for a zero divisor.
/// - [`RuntimeError::UnknownIdentifier`] for an identifier literal.
///
/// # Example
/// ```
/// use prattle::{interpreter::evaluator::core::evaluate, parse};
///
/// let tree = parse("2(3 + 4)").unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 14.0);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Literal { text, line } => eval_literal(text, *line),
        Expr::UnaryOp { op, expr, .. } => Ok(eval_unary(*op, evaluate(expr)?)),
        Expr::BinaryOp { left,
                         op,
                         right,
                         line, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, left, right, *line)
        },
    }
}

/// Interprets the text of a literal node.
///
/// Keyword constants come from [`KEYWORD_CONSTANTS`]. Any other text that
/// starts with a digit is read as a floating-point number; text that does not
/// is an identifier, and identifiers have no value.
///
/// # Errors
/// - [`RuntimeError::UnknownIdentifier`] for identifier text.
/// - [`RuntimeError::InvalidNumber`] for digit-led text that is not a number.
///
/// # Example
/// ```
/// use prattle::interpreter::evaluator::core::eval_literal;
///
/// assert_eq!(eval_literal("2.50", 1).unwrap(), 2.5);
/// assert_eq!(eval_literal("e", 1).unwrap(), std::f64::consts::E);
/// assert!(eval_literal("x", 1).is_err());
/// ```
pub fn eval_literal(text: &str, line: usize) -> EvalResult<f64> {
    if let Some(&(_, value)) = KEYWORD_CONSTANTS.iter().find(|(keyword, _)| *keyword == text) {
        return Ok(value);
    }

    // `str::parse` also accepts "inf" and "nan", which are identifiers here.
    if !text.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(RuntimeError::UnknownIdentifier { name: text.to_string(),
                                                     line });
    }

    text.parse()
        .map_err(|_| RuntimeError::InvalidNumber { text: text.to_string(),
                                                   line })
}
