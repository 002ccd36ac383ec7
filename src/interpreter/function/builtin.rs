//! The operations behind the default operator table. Each one is a plain
//! IEEE 754 operation: nothing is guarded, so division by zero yields an
//! infinity and the square root of a negative number yields NaN.

/// `+`
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `-`
#[must_use]
pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

/// `*`
#[must_use]
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// `/`
///
/// # Example
/// ```
/// use polcalc::interpreter::function::builtin::div;
///
/// assert_eq!(div(4.0, 2.0), 2.0);
/// assert_eq!(div(4.0, 0.0), f64::INFINITY);
/// assert_eq!(div(-4.0, 0.0), f64::NEG_INFINITY);
/// ```
#[must_use]
pub fn div(a: f64, b: f64) -> f64 {
    a / b
}

/// `^`, raising `base` to a floating-point `exponent`.
///
/// # Example
/// ```
/// use polcalc::interpreter::function::builtin::pow;
///
/// assert_eq!(pow(2.0, 10.0), 1024.0);
/// assert_eq!(pow(2.0, -2.0), 0.25);
/// ```
#[must_use]
pub fn pow(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// `sqrt`, the principal square root.
///
/// # Example
/// ```
/// use polcalc::interpreter::function::builtin::sqrt;
///
/// assert_eq!(sqrt(9.0), 3.0);
/// assert!(sqrt(-1.0).is_nan());
/// ```
#[must_use]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}
