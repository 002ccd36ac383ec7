use log::debug;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::function::{builtin, core::NumericFunction},
};

/// Maps an operator identifier to the numeric function it names.
///
/// The evaluator only depends on this trait, so a different operator set can
/// be substituted without touching it. Any closure of the matching shape is a
/// resolver as well:
///
/// ```
/// use polcalc::{
///     error::CalcError,
///     interpreter::function::{core::NumericFunction, resolver::FunctionResolver},
/// };
///
/// let only_neg = |id: &str| match id {
///     "neg" => Ok(NumericFunction::Unary(|a| -a)),
///     _ => Err(CalcError::unknown_function(id)),
/// };
///
/// assert!(only_neg.resolve("neg").is_ok());
/// assert!(only_neg.resolve("+").is_err());
/// ```
pub trait FunctionResolver {
    /// Looks up the function named by `id`.
    ///
    /// # Errors
    /// Returns [`CalcError::UnknownFunction`] when `id` is not recognised.
    fn resolve(&self, id: &str) -> CalcResult<NumericFunction>;
}

impl<F> FunctionResolver for F
    where F: Fn(&str) -> CalcResult<NumericFunction>
{
    fn resolve(&self, id: &str) -> CalcResult<NumericFunction> {
        self(id)
    }
}

/// Defines the default operator table.
///
/// Each entry provides an operator identifier and the tagged function it
/// resolves to. The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `DEFAULT_FUNCTIONS` (public list of operator identifiers).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[(&str, NumericFunction)] = &[
            $(
                ($name, $func),
            )*
        ];
        /// Operator identifiers recognised by [`DefaultFunctions`], in table
        /// order.
        pub const DEFAULT_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "+"    => NumericFunction::Binary(builtin::add),
    "-"    => NumericFunction::Binary(builtin::sub),
    "*"    => NumericFunction::Binary(builtin::mul),
    "/"    => NumericFunction::Binary(builtin::div),
    "^"    => NumericFunction::Binary(builtin::pow),
    "sqrt" => NumericFunction::Unary(builtin::sqrt),
}

/// The built-in operator set: `+`, `-`, `*`, `/`, `^` and `sqrt`.
///
/// # Example
/// ```
/// use polcalc::interpreter::function::{
///     core::Arity,
///     resolver::{DefaultFunctions, FunctionResolver},
/// };
///
/// let sqrt = DefaultFunctions.resolve("sqrt").unwrap();
/// assert_eq!(sqrt.arity(), Arity::Unary);
///
/// let err = DefaultFunctions.resolve("multiply").unwrap_err();
/// assert_eq!(err.to_string(), "invalid function: multiply");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFunctions;

impl FunctionResolver for DefaultFunctions {
    fn resolve(&self, id: &str) -> CalcResult<NumericFunction> {
        BUILTIN_TABLE.iter()
                     .find(|(name, _)| *name == id)
                     .map(|(_, func)| *func)
                     .ok_or_else(|| {
                         debug!("no builtin named {id:?}");
                         CalcError::unknown_function(id)
                     })
    }
}
