use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::LevelFilter;
use polcalc::{
    Calculator, DefaultFunctions, SpaceTokenizer, Tokenizer, WhitespaceTokenizer,
    error::ShellError,
    shell::{
        Session, ShellConfig, config::DEFAULT_PROMPT, format::Formatter,
        repl::run_interactive, script::run_script,
    },
};

/// polcalc evaluates prefix-notation arithmetic such as `+ 2 2` or `sqrt 9`.
///
/// Without arguments it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every line of this file instead of starting a session.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Prompt shown before each interactive line.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Disables coloured output.
    #[arg(long)]
    no_color: bool,

    /// Treats any run of whitespace as a single separator.
    #[arg(long)]
    whitespace: bool,

    /// Increases log verbosity; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// A single expression to evaluate, such as "+ 2 2".
    expression: Option<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = ShellConfig { prompt: args.prompt.clone(),
                               color:  !args.no_color, };

    let tokenizer: &dyn Tokenizer =
        if args.whitespace { &WhitespaceTokenizer } else { &SpaceTokenizer };
    let session = Session::new(Calculator::with_tokenizer(DefaultFunctions, tokenizer),
                               Formatter::new(config.color));

    match run(&args, &session, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Dispatches to one-shot, script or interactive mode.
///
/// Returns `Ok(false)` when an evaluation failed in a non-interactive mode.
fn run(args: &Args,
       session: &Session<DefaultFunctions, &dyn Tokenizer>,
       config: &ShellConfig)
       -> Result<bool, ShellError> {
    if let Some(expression) = &args.expression {
        let reply = session.respond(expression);
        for line in session.render(&reply) {
            println!("{line}");
        }
        return Ok(!reply.is_failure());
    }

    if let Some(path) = &args.file {
        let file = File::open(path).map_err(|source| ShellError::ScriptUnreadable { path: path.clone(),
                                                                                    source })?;
        let report = run_script(session, BufReader::new(file), std::io::stdout())?;
        return Ok(report.failed == 0);
    }

    run_interactive(session, config)?;
    Ok(true)
}
