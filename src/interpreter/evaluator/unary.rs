use crate::ast::UnaryOperator;

/// Evaluates a unary operation on a number.
///
/// - `Negate`: arithmetic negation.
/// - `Sqrt`: the square root. A negative operand yields NaN, the IEEE result,
///   rather than an error.
///
/// # Example
/// ```
/// use prattle::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 5.0), -5.0);
/// assert_eq!(eval_unary(UnaryOperator::Sqrt, 9.0), 3.0);
/// assert!(eval_unary(UnaryOperator::Sqrt, -1.0).is_nan());
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Negate => -value,
        UnaryOperator::Sqrt => value.sqrt(),
    }
}
