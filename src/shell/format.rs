use colored::{Color, Colorize};

use crate::{error::CalcError, util::num::format_number};

/// Renders shell output, with or without terminal colours.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    colored: bool,
}

impl Formatter {
    /// Creates a formatter; `colored` turns ANSI colours on.
    #[must_use]
    pub const fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.colored { text.color(color).to_string() } else { text.to_string() }
    }

    /// Dimmed, for example input and key names.
    pub(crate) fn hint(&self, text: &str) -> String {
        if self.colored { text.dimmed().to_string() } else { text.to_string() }
    }

    /// Formats an evaluation result.
    ///
    /// # Example
    /// ```
    /// use polcalc::shell::format::Formatter;
    ///
    /// let plain = Formatter::new(false);
    /// assert_eq!(plain.value(4.0), "4");
    /// assert_eq!(plain.value(f64::NAN), "NaN");
    /// ```
    #[must_use]
    pub fn value(&self, value: f64) -> String {
        self.colorize(&format_number(value), Color::Green)
    }

    /// Formats an evaluation error as `Error: <message>`.
    ///
    /// # Example
    /// ```
    /// use polcalc::{error::CalcError, shell::format::Formatter};
    ///
    /// let plain = Formatter::new(false);
    /// let err = CalcError::ArityMismatch { expected: 2, got: 1 };
    ///
    /// assert_eq!(plain.error(&err), "Error: Invalid arity for function, expected 2, got 1");
    /// ```
    #[must_use]
    pub fn error(&self, error: &CalcError) -> String {
        let message = error.to_string();
        let message = if self.colored { message.red().bold().to_string() } else { message };
        format!("Error: {message}")
    }

    /// The line printed when an interactive session starts.
    #[must_use]
    pub fn banner(&self) -> String {
        let key = |k: &str| {
            if self.colored { k.dimmed().yellow().to_string() } else { k.to_string() }
        };
        format!("Enter an expression ({} for help, {} to exit)", key("h"), key("ctrl+d"))
    }
}
