use std::io::{self, Write};

use log::{info, warn};
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    error::ShellError,
    interpreter::{function::resolver::FunctionResolver, tokenizer::Tokenizer},
    shell::{config::ShellConfig, session::{Reply, Session}},
};

/// Runs the interactive loop until end of input.
///
/// Prints the banner, then prompts with [`ShellConfig::prompt`] and answers
/// each line through the session. Evaluation errors are printed and the loop
/// continues. Ctrl+C discards the current line; Ctrl+D ends the session.
///
/// # Errors
/// Returns [`ShellError`] if the line editor cannot be created or the terminal
/// fails.
pub fn run_interactive<F, T>(session: &Session<F, T>, config: &ShellConfig) -> Result<(), ShellError>
    where F: FunctionResolver,
          T: Tokenizer
{
    let mut editor = DefaultEditor::new()?;
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", session.formatter().banner())?;
    info!("interactive session started");

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                let reply = session.respond(&line);
                if !matches!(reply, Reply::Blank) {
                    editor.add_history_entry(line.trim())?;
                }

                for rendered in session.render(&reply) {
                    writeln!(stdout, "{rendered}")?;
                }
            },
            Err(ReadlineError::Interrupted) => {
                warn!("line discarded by interrupt");
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    info!("interactive session ended");
    Ok(())
}
