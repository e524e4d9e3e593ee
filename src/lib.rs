//! # prattle
//!
//! prattle reads one line of arithmetic at a time and produces both a
//! canonical, fully parenthesized rendering of it and its numeric value.
//! A line goes through three stages: a tokenizer, a precedence-climbing
//! parser that builds an expression tree, and two read-only walks of that
//! tree, one evaluating and one printing.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// an arithmetic expression as a tree. The tree is built by the parser and
/// traversed by the evaluator and the printer.
///
/// # Responsibilities
/// - Defines the three node shapes: literal, unary and binary.
/// - Attaches source lines to nodes for error reporting.
/// - Names the symbol of every operator.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines every error that can be raised while processing a
/// line, each carrying the line number it refers to, plus the pipeline-level
/// `Error` that wraps them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the stages of processing a line.
///
/// This module holds the lexer, parser, evaluator and printer.
///
/// # Responsibilities
/// - Turns source text into tokens, tokens into a tree, and a tree into a
///   number or a string.
/// - Manages the flow of errors between phases.
pub mod interpreter;

pub use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::core::evaluate,
        lexer::{UnknownCharPolicy, scan_tokens},
        printer::print,
    },
};
use crate::{
    error::LexDiagnostic,
    interpreter::{lexer::scan, parser::core::parse_tokens},
};

/// What a successfully processed line produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The canonical printed form of the expression.
    pub printed: String,
    /// The numeric value of the expression.
    pub value:   f64,
}

/// Scans and parses `source` into an expression tree.
///
/// Unknown characters are rejected.
///
/// # Errors
/// Returns the first lexical or syntax error.
///
/// # Example
/// ```
/// use prattle::{Error, parse};
///
/// assert_eq!(parse("1 + 2 * 3").unwrap().to_string(), "(1 + (2 * 3))");
/// assert!(matches!(parse("(1 + 2"), Err(Error::Parse(_))));
/// ```
pub fn parse(source: &str) -> Result<Expr, Error> {
    let tokens = scan_tokens(source)?;
    Ok(parse_tokens(&tokens)?)
}

/// Processes one line: scans, parses, prints and evaluates it.
///
/// Unknown characters are rejected; see [`evaluate_line_with`] to skip them
/// instead.
///
/// # Errors
/// Returns the first error of any stage. Nothing after a failing stage runs.
///
/// # Example
/// ```
/// use prattle::evaluate_line;
///
/// let outcome = evaluate_line("2(3 + 4)").unwrap();
/// assert_eq!(outcome.printed, "(2 * (3 + 4))");
/// assert_eq!(outcome.value, 14.0);
///
/// let error = evaluate_line("5 / 0").unwrap_err();
/// assert_eq!(error.to_string(), "Division by zero (line 1)");
/// ```
pub fn evaluate_line(source: &str) -> Result<Outcome, Error> {
    evaluate_line_with(source, UnknownCharPolicy::Reject).map(|(outcome, _)| outcome)
}

/// Processes one line under the given unknown-character policy.
///
/// Returns the outcome together with the characters skipped while scanning,
/// which is always empty under [`UnknownCharPolicy::Reject`].
///
/// # Errors
/// Returns the first error of any stage.
///
/// # Example
/// ```
/// use prattle::{UnknownCharPolicy, evaluate_line_with};
///
/// let (outcome, skipped) = evaluate_line_with("1 + 2 @", UnknownCharPolicy::Skip).unwrap();
/// assert_eq!(outcome.value, 3.0);
/// assert_eq!(skipped[0].character, "@");
/// ```
pub fn evaluate_line_with(source: &str,
                          policy: UnknownCharPolicy)
                          -> Result<(Outcome, Vec<LexDiagnostic>), Error> {
    let (tokens, diagnostics) = scan(source, policy)?;
    let tree = parse_tokens(&tokens)?;

    let printed = print(&tree);
    let value = evaluate(&tree)?;

    Ok((Outcome { printed, value }, diagnostics))
}
