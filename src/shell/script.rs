use std::io::{BufRead, Write};

use log::info;

use crate::{
    error::ShellError,
    interpreter::{function::resolver::FunctionResolver, tokenizer::Tokenizer},
    shell::session::{Reply, Session},
};

/// Summary of a finished script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    /// Number of lines that were evaluated.
    pub evaluated: usize,
    /// Number of evaluated lines that produced an error.
    pub failed:    usize,
}

/// Evaluates every line of `input` and writes each reply to `output`.
///
/// Evaluation errors are printed and counted, never fatal; only I/O failures
/// stop the run.
///
/// # Errors
/// Returns [`ShellError::Io`] if reading or writing fails.
///
/// # Example
/// ```
/// use polcalc::{
///     Calculator,
///     shell::{Session, format::Formatter, script::run_script},
/// };
///
/// let session = Session::new(Calculator::builtin(), Formatter::new(false));
/// let mut out = Vec::new();
///
/// let report = run_script(&session, "+ 1 2\n\nsqrt\n".as_bytes(), &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(),
///            "3\nError: Invalid arity for function, expected 1, got 0\n");
/// assert_eq!(report.evaluated, 2);
/// assert_eq!(report.failed, 1);
/// ```
pub fn run_script<F, T, R, W>(session: &Session<F, T>,
                              input: R,
                              mut output: W)
                              -> Result<ScriptReport, ShellError>
    where F: FunctionResolver,
          T: Tokenizer,
          R: BufRead,
          W: Write
{
    let mut report = ScriptReport::default();

    for line in input.lines() {
        let line = line?;
        let reply = session.respond(&line);

        if matches!(reply, Reply::Value(_) | Reply::Failure(_)) {
            report.evaluated += 1;
        }
        if reply.is_failure() {
            report.failed += 1;
        }

        for rendered in session.render(&reply) {
            writeln!(output, "{rendered}")?;
        }
    }

    output.flush()?;
    info!("script finished: {} evaluated, {} failed", report.evaluated, report.failed);
    Ok(report)
}
