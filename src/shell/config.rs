/// Prompt shown before every interactive line.
pub const DEFAULT_PROMPT: &str = "> ";

/// Options for an interactive or script session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Text printed before each line is read.
    pub prompt: String,
    /// Whether output carries ANSI colours.
    pub color:  bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { prompt: DEFAULT_PROMPT.to_string(),
               color:  true, }
    }
}
