use crate::{
    interpreter::function::resolver::DEFAULT_FUNCTIONS,
    shell::format::Formatter,
};

/// The input that asks for usage help.
pub const HELP_COMMAND: &str = "h";

/// Returns the usage hint printed for [`HELP_COMMAND`].
///
/// # Example
/// ```
/// use polcalc::shell::{format::Formatter, help::usage};
///
/// let lines = usage(&Formatter::new(false));
/// assert_eq!(lines[1], "\t> + 2 2");
/// assert_eq!(lines[2], "\t4");
/// ```
#[must_use]
pub fn usage(formatter: &Formatter) -> Vec<String> {
    vec!["Give expressions starting with the operator and then the arguments, for example:".to_string(),
         format!("\t> {}", formatter.hint("+ 2 2")),
         format!("\t{}", formatter.value(4.0)),
         format!("Operators: {}", DEFAULT_FUNCTIONS.join(" "))]
}
