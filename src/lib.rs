//! # polcalc
//!
//! polcalc is a prefix-notation calculator written in Rust.
//! An expression names its operator first and its operands after it, such as
//! `+ 2 2` or `sqrt 9`. The crate provides the evaluator, its pluggable
//! tokenizer and function resolver, and the interactive shell built on them.

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
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for evaluation and the shell.
///
/// This module defines the errors raised while resolving an operator or
/// validating its operands, and the errors that can end a shell session.
///
/// # Responsibilities
/// - Defines error enums for evaluator and shell failures.
/// - Carries the details needed for user-facing messages, such as expected and
///   actual operand counts.
pub mod error;
/// Orchestrates the evaluation of a single expression.
///
/// This module ties together tokenization, operator resolution and evaluation.
/// It exposes the public API for evaluating prefix expressions.
///
/// # Responsibilities
/// - Splits input lines into tokens.
/// - Resolves operator identifiers to numeric functions.
/// - Validates arity and computes results.
pub mod interpreter;
/// The line-oriented front ends.
///
/// This module contains the interactive read-eval-print loop and the script
/// runner, together with output formatting and help text. Failures of a
/// single expression are printed and never end a session.
pub mod shell;
/// General utilities for numeric text.
///
/// This module provides the permissive operand parser and the formatting of
/// results for display.
pub mod util;

pub use error::{CalcError, CalcResult};
pub use interpreter::{
    evaluator::core::Calculator,
    function::{
        core::{Arity, NumericFunction},
        resolver::{DefaultFunctions, FunctionResolver},
    },
    tokenizer::{SpaceTokenizer, Tokenizer, WhitespaceTokenizer},
};

/// Evaluates one expression with the built-in operators.
///
/// # Errors
/// Returns an error if the operator is unknown or the operand count does not
/// match its arity.
///
/// # Examples
/// ```
/// use polcalc::evaluate;
///
/// assert_eq!(evaluate("^ 2 8").unwrap(), 256.0);
/// assert!(evaluate("+ hello 1").unwrap().is_nan());
///
/// // 'multiply' is not a known operator
/// assert!(evaluate("multiply 2 3").is_err());
/// ```
pub fn evaluate(input: &str) -> CalcResult<f64> {
    Calculator::builtin().run(input)
}
