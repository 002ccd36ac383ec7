use log::debug;

use crate::{
    error::CalcResult,
    interpreter::{
        evaluator::utils::{check_arity, parse_operands},
        function::resolver::{DefaultFunctions, FunctionResolver},
        tokenizer::{SpaceTokenizer, Tokenizer},
    },
};

/// Evaluates prefix-notation expressions such as `+ 2 2` or `sqrt 9`.
///
/// A `Calculator` owns a function resolver and a tokenizer and nothing else.
/// It keeps no state between calls, so evaluating the same input twice always
/// gives the same outcome and a single instance can be shared freely.
///
/// ## Usage
///
/// [`Calculator::builtin`] uses the built-in operator set and splits on single
/// spaces. [`Calculator::new`] and [`Calculator::with_tokenizer`] accept other
/// collaborators.
#[derive(Debug, Clone)]
pub struct Calculator<F = DefaultFunctions, T = SpaceTokenizer> {
    functions: F,
    tokenizer: T,
}

impl Calculator {
    /// Creates a calculator with the built-in operator set and the default
    /// single-space tokenizer.
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(DefaultFunctions)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<F: FunctionResolver> Calculator<F> {
    /// Creates a calculator with the given function resolver and the default
    /// single-space tokenizer.
    #[must_use]
    pub const fn new(functions: F) -> Self {
        Self { functions,
               tokenizer: SpaceTokenizer }
    }
}

impl<F: FunctionResolver, T: Tokenizer> Calculator<F, T> {
    /// Creates a calculator with both collaborators supplied.
    #[must_use]
    pub const fn with_tokenizer(functions: F, tokenizer: T) -> Self {
        Self { functions,
               tokenizer }
    }

    /// Evaluates one expression.
    ///
    /// The first token names the operator and the remaining tokens are its
    /// operands. Input whose first token is empty evaluates to NaN without
    /// consulting the resolver. Operands that are not numbers also yield NaN.
    ///
    /// # Errors
    /// - [`CalcError::UnknownFunction`](crate::error::CalcError::UnknownFunction)
    ///   when the resolver does not know the operator.
    /// - [`CalcError::ArityMismatch`](crate::error::CalcError::ArityMismatch)
    ///   when the operand count differs from the function's arity.
    ///
    /// # Example
    /// ```
    /// use polcalc::Calculator;
    ///
    /// let calculator = Calculator::builtin();
    ///
    /// assert_eq!(calculator.run("+ 2 2").unwrap(), 4.0);
    /// assert_eq!(calculator.run("/ 4 0").unwrap(), f64::INFINITY);
    /// assert!(calculator.run("").unwrap().is_nan());
    /// assert!(calculator.run("+ 2").is_err());
    /// ```
    pub fn run(&self, input: &str) -> CalcResult<f64> {
        let tokens = self.tokenizer.tokenize(input);
        debug!("tokens: {tokens:?}");

        let Some((id, operands)) = tokens.split_first() else {
            return Ok(f64::NAN);
        };
        if id.is_empty() {
            return Ok(f64::NAN);
        }

        let func = self.functions.resolve(id)?;
        debug!("resolved {id:?} as a {} function", func.arity());

        check_arity(func.arity(), operands.len())?;

        Ok(func.call(&parse_operands(operands)))
    }
}
