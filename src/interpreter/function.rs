/// Built-in function implementations.
///
/// Contains the elementary floating-point operations of the default function
/// set.
pub mod builtin;
/// Numeric function values and their arity.
///
/// Pairs every callable with an explicit arity tag so the evaluator can
/// validate operand counts before invoking it.
pub mod core;
/// Operator-to-function resolution.
///
/// Declares the resolver trait the evaluator depends on and the default
/// lookup table of built-in operators.
pub mod resolver;
