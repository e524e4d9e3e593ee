/// Binary operator evaluation logic.
///
/// Applies `+ - * / ^` to two numbers and reports division by zero.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation and square root.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the tree walk, literal interpretation with the keyword constant
/// table, and the evaluator's result type.
pub mod core;
