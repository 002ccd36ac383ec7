/// The evaluator module runs expressions and computes results.
///
/// It takes a line of input through the tokenizer, resolves the operator,
/// enforces the operator's arity and applies the function to the parsed
/// operands. It is the core execution engine of the calculator.
///
/// # Responsibilities
/// - Orchestrates tokenization, resolution and invocation.
/// - Reports structural errors such as unknown operators or arity mismatches.
/// - Degrades malformed operands to NaN.
pub mod evaluator;
/// Operator functions and their resolution.
///
/// Declares the tagged numeric function type, the built-in arithmetic and the
/// resolver abstraction that maps an operator identifier to a function.
///
/// # Responsibilities
/// - Pairs every function with an explicit arity.
/// - Provides the default operator table.
/// - Lets callers plug in their own operator sets.
pub mod function;
/// The lexer backing the whitespace tokenizer.
pub mod lexer;
/// The tokenizer module splits raw input lines into tokens.
///
/// # Responsibilities
/// - Declares the tokenizer abstraction the evaluator depends on.
/// - Provides the default single-space tokenizer and a whitespace-collapsing
///   alternative.
pub mod tokenizer;
