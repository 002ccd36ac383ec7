/// Shell configuration.
///
/// Holds the options that shape a session: the prompt text and whether output
/// is coloured.
pub mod config;
/// Output formatting.
///
/// Renders results, errors and the banner, applying terminal colours when they
/// are enabled.
pub mod format;
/// Usage text shown for the `h` command.
pub mod help;
/// The interactive read-eval-print loop.
///
/// Reads lines through a line editor with in-memory history until end of
/// input, evaluating each one and printing its reply.
pub mod repl;
/// Non-interactive evaluation of a stream of lines.
pub mod script;
/// Line handling shared by the interactive and script front ends.
///
/// Classifies each input line, runs it through the calculator when needed
/// and renders the reply.
pub mod session;

pub use config::ShellConfig;
pub use session::{Reply, Session};
