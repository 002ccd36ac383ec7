/// Core evaluation logic.
///
/// Contains the [`Calculator`](core::Calculator) orchestrator, which wires a
/// tokenizer and a function resolver together and runs one expression at a
/// time.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides the arity gate and operand parsing shared by the evaluator.
pub mod utils;
