use log::trace;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::function::core::Arity,
    util::num::parse_lenient,
};

/// Validates that `got` operands satisfy the arity of the resolved function.
///
/// # Errors
/// Returns [`CalcError::ArityMismatch`] carrying both counts when they
/// differ.
///
/// # Example
/// ```
/// use polcalc::interpreter::{evaluator::utils::check_arity, function::core::Arity};
///
/// assert!(check_arity(Arity::Binary, 2).is_ok());
///
/// let err = check_arity(Arity::Unary, 0).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid arity for function, expected 1, got 0");
/// ```
pub const fn check_arity(arity: Arity, got: usize) -> CalcResult<()> {
    if arity.check(got) {
        Ok(())
    } else {
        Err(CalcError::ArityMismatch { expected: arity.count(),
                                       got })
    }
}

/// Parses operand tokens into numbers.
///
/// Unparsable text becomes NaN rather than an error, so a bad operand
/// contaminates the result instead of aborting the evaluation.
///
/// # Example
/// ```
/// use polcalc::interpreter::evaluator::utils::parse_operands;
///
/// let parsed = parse_operands(&["2".to_string(), "x".to_string()]);
/// assert_eq!(parsed[0], 2.0);
/// assert!(parsed[1].is_nan());
/// ```
#[must_use]
pub fn parse_operands(tokens: &[String]) -> Vec<f64> {
    let operands = tokens.iter().map(|t| parse_lenient(t)).collect::<Vec<_>>();
    trace!("parsed operands {tokens:?} as {operands:?}");
    operands
}
