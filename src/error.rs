/// Evaluation errors.
///
/// Defines the structural failures the calculator can raise while resolving
/// an operator or validating its operands. Malformed numeric text is not an
/// error; it evaluates to NaN instead.
pub mod calc_error;
/// Shell errors.
///
/// Contains the failures of the interactive shell and the script runner,
/// such as terminal or file I/O problems. These never originate in the
/// evaluator.
pub mod shell_error;

pub use calc_error::{CalcError, CalcResult};
pub use shell_error::ShellError;
