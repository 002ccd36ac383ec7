use std::fmt;

/// Specifies how many operands a numeric function takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one operand.
    Unary,
    /// Exactly two operands.
    Binary,
}

impl Arity {
    /// Returns the operand count this arity stands for.
    ///
    /// # Example
    /// ```
    /// use polcalc::interpreter::function::core::Arity;
    ///
    /// assert_eq!(Arity::Unary.count(), 1);
    /// assert_eq!(Arity::Binary.count(), 2);
    /// ```
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }

    /// Tests whether `n` operands satisfy this arity.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        self.count() == n
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary => write!(f, "unary"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

/// A pure function over floating-point numbers, tagged with its arity.
///
/// The arity is carried by the variant itself, so it can never disagree with
/// the number of parameters the wrapped function accepts.
#[derive(Debug, Clone, Copy)]
pub enum NumericFunction {
    /// A function of one operand, such as `sqrt`.
    Unary(fn(f64) -> f64),
    /// A function of two operands, such as `+`.
    Binary(fn(f64, f64) -> f64),
}

impl NumericFunction {
    /// Returns the arity tag of this function.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        match self {
            Self::Unary(_) => Arity::Unary,
            Self::Binary(_) => Arity::Binary,
        }
    }

    /// Invokes the function with the given operands.
    ///
    /// The caller is responsible for having validated the operand count with
    /// [`Arity::check`]. A unary function reads only the first operand; a
    /// slice shorter than the arity is padded with NaN.
    ///
    /// # Example
    /// ```
    /// use polcalc::interpreter::function::core::NumericFunction;
    ///
    /// let add = NumericFunction::Binary(|a, b| a + b);
    /// assert_eq!(add.call(&[2.0, 3.0]), 5.0);
    ///
    /// let neg = NumericFunction::Unary(|a| -a);
    /// assert_eq!(neg.call(&[4.0]), -4.0);
    /// ```
    #[must_use]
    pub fn call(&self, operands: &[f64]) -> f64 {
        let operand = |i: usize| operands.get(i).copied().unwrap_or(f64::NAN);

        match self {
            Self::Unary(f) => f(operand(0)),
            Self::Binary(f) => f(operand(0), operand(1)),
        }
    }
}
