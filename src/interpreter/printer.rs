use std::fmt;

use crate::ast::Expr;

/// Renders an expression tree in canonical form.
///
/// Literals print as written. A unary node prints its symbol followed by its
/// operand in parentheses, and every binary node is wrapped in parentheses
/// with single spaces around the operator. Implicit multiplications print as
/// an explicit `*`. The output scans and parses back to a tree with the same
/// value.
///
/// # Example
/// ```
/// use prattle::{interpreter::printer::print, parse};
///
/// assert_eq!(print(&parse("-3^2").unwrap()), "(-(3) ^ 2)");
/// assert_eq!(print(&parse("2 $9").unwrap()), "(2 * $(9))");
/// ```
#[must_use]
pub fn print(expr: &Expr) -> String {
    expr.to_string()
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { text, .. } => write!(f, "{text}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "{op}({expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}
