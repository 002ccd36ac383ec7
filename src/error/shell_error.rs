use std::{io, path::PathBuf};

use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can end a shell or script session.
pub enum ShellError {
    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The line editor failed for a reason other than interrupt or end of
    /// input.
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
    /// A script file could not be opened.
    #[error("Failed to read the input file '{}'. Perhaps this file does not exist?", path.display())]
    ScriptUnreadable {
        /// The path that was requested.
        path:   PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
