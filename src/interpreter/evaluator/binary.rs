use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates a binary operation between two numbers.
///
/// `Pow` follows `f64::powf`, so fractional and negative exponents behave as
/// the real power function does (a negative base with a fractional exponent
/// gives NaN). Division checks its divisor: a zero divisor, of either sign, is
/// an error instead of an infinity.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// [`RuntimeError::DivisionByZero`] when `op` is `Div` and `right` is zero.
///
/// # Example
/// ```
/// use prattle::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Pow, 2.0, 10.0, 1).unwrap(), 1024.0);
/// assert!(eval_binary(BinaryOperator::Div, 5.0, 0.0, 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, line: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    Ok(match op {
           Add => left + right,
           Sub => left - right,
           Mul => left * right,
           Div => {
               if right == 0.0 {
                   return Err(RuntimeError::DivisionByZero { line });
               }
               left / right
           },
           Pow => left.powf(right),
       })
}
