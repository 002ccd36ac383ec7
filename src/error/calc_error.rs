use thiserror::Error;

/// Result type used by the calculator.
///
/// Every evaluation step returns either a value of type `T` or a
/// [`CalcError`] describing the structural failure.
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating an expression.
pub enum CalcError {
    /// The operator identifier is not known to the function resolver.
    #[error("invalid function: {name}")]
    UnknownFunction {
        /// The identifier that failed to resolve.
        name: String,
    },
    /// The number of operands does not match the arity of the function.
    #[error("Invalid arity for function, expected {expected}, got {got}")]
    ArityMismatch {
        /// The arity declared by the resolved function.
        expected: usize,
        /// The number of operand tokens that were supplied.
        got:      usize,
    },
}

impl CalcError {
    /// Builds an [`CalcError::UnknownFunction`] for the given identifier.
    ///
    /// # Example
    /// ```
    /// use polcalc::error::CalcError;
    ///
    /// let e = CalcError::unknown_function("multiply");
    /// assert_eq!(e.to_string(), "invalid function: multiply");
    /// ```
    #[must_use]
    pub fn unknown_function(name: &str) -> Self {
        Self::UnknownFunction { name: name.to_string() }
    }
}
