use log::debug;

use crate::{
    error::CalcError,
    interpreter::{evaluator::core::Calculator, function::resolver::FunctionResolver,
                  tokenizer::Tokenizer},
    shell::{format::Formatter, help::{HELP_COMMAND, usage}},
};

/// What the shell answers to one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The line was blank; nothing is printed.
    Blank,
    /// The user asked for usage help.
    Help,
    /// The expression evaluated to a number, possibly NaN.
    Value(f64),
    /// The expression could not be evaluated.
    Failure(CalcError),
}

impl Reply {
    /// Returns `true` for [`Reply::Failure`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Couples a calculator with an output formatter.
///
/// A session turns raw input lines into [`Reply`] values and renders those
/// replies as printable lines. It is shared by the interactive loop and the
/// script runner so both treat input identically.
#[derive(Debug, Clone)]
pub struct Session<F, T> {
    calculator: Calculator<F, T>,
    formatter:  Formatter,
}

impl<F: FunctionResolver, T: Tokenizer> Session<F, T> {
    /// Creates a session evaluating with `calculator` and printing through
    /// `formatter`.
    #[must_use]
    pub const fn new(calculator: Calculator<F, T>, formatter: Formatter) -> Self {
        Self { calculator,
               formatter }
    }

    /// Returns the formatter used to render replies.
    pub const fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Answers one line of input.
    ///
    /// The line is trimmed first. Blank lines and the help command never reach
    /// the calculator.
    ///
    /// # Example
    /// ```
    /// use polcalc::{
    ///     Calculator,
    ///     shell::{Reply, Session, format::Formatter},
    /// };
    ///
    /// let session = Session::new(Calculator::builtin(), Formatter::new(false));
    ///
    /// assert_eq!(session.respond("  * 3 4 "), Reply::Value(12.0));
    /// assert_eq!(session.respond("h"), Reply::Help);
    /// assert_eq!(session.respond("   "), Reply::Blank);
    /// ```
    pub fn respond(&self, line: &str) -> Reply {
        let input = line.trim();

        if input.is_empty() {
            return Reply::Blank;
        }
        if input == HELP_COMMAND {
            return Reply::Help;
        }

        match self.calculator.run(input) {
            Ok(value) => Reply::Value(value),
            Err(e) => {
                debug!("evaluation of {input:?} failed: {e}");
                Reply::Failure(e)
            },
        }
    }

    /// Renders a reply as the lines the shell prints.
    #[must_use]
    pub fn render(&self, reply: &Reply) -> Vec<String> {
        match reply {
            Reply::Blank => Vec::new(),
            Reply::Help => usage(&self.formatter),
            Reply::Value(value) => vec![self.formatter.value(*value)],
            Reply::Failure(e) => vec![self.formatter.error(e)],
        }
    }
}
