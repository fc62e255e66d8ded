//! CLI module for Tally

mod args;

pub use args::{Args, CalcArgs, FormatArg, LogArgs};

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{Error, Result};
use crate::expr::{Evaluator, Value};
use crate::math::factorial;
use crate::report::{render_factorial, render_top_words};
use crate::words::count_word_frequencies;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};

/// Prompt shown by `tally-calc` when no expression is passed
pub const CALC_PROMPT: &str = "Enter an arithmetic expression (e.g. 2 + 2): ";

/// Run the `tally` binary
pub fn run() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return exit_for_clap_error(e),
    };
    init_logging(args.log);

    let stdout = io::stdout();
    match execute(args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.has_context() => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the `tally-calc` binary
pub fn run_calc() -> ExitCode {
    let args = match CalcArgs::try_parse() {
        Ok(args) => args,
        Err(e) => return exit_for_clap_error(e),
    };
    init_logging(args.log);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match execute_calc(args, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(Error::Expression(e)) => {
            eprintln!("Error evaluating expression: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Usage errors exit with 1; help and version output exit with 0
fn exit_for_clap_error(e: clap::Error) -> ExitCode {
    let _ = e.print();
    if e.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over flags.
pub fn init_logging(log: LogArgs) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if log.quiet {
        "error"
    } else {
        match log.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Load the explicit config file, or `tally.toml` if present
fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => Ok(Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))),
    }
}

/// Factorial (if requested), then the word report
pub fn execute(args: Args, out: &mut impl Write) -> Result<()> {
    let mut cfg = resolve_config(args.config.as_deref())?;
    cfg.merge_cli(args.top, args.format.map(Into::into), None);
    cfg.validate()?;
    debug!(?cfg, "Resolved configuration");

    if let Some(n) = args.factorial {
        let result = factorial(n).map_err(Error::factorial)?;
        writeln!(out, "{}", render_factorial(n, result))?;
    }

    info!("Counting words in {}", args.textfile.display());
    let report = count_word_frequencies(&args.textfile, &cfg.tokenizer)
        .and_then(|freqs| render_top_words(&freqs, cfg.report.top_n, cfg.report.format))
        .map_err(|e| Error::read_text(&args.textfile, e))?;
    out.write_all(report.as_bytes())?;
    out.flush()?;

    Ok(())
}

/// Evaluate `--expr`, or prompt for and read one line of input
pub fn execute_calc(
    args: CalcArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Value> {
    let mut cfg = resolve_config(args.config.as_deref())?;
    cfg.merge_cli(None, None, args.max_depth);
    cfg.validate()?;

    let source = match args.expr {
        Some(expr) => expr,
        None => {
            write!(out, "{}", CALC_PROMPT)?;
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            line
        }
    };

    let evaluator = Evaluator::new().with_max_depth(cfg.calc.max_depth);
    let value = evaluator.evaluate(source.trim_end_matches(['\r', '\n']))?;
    writeln!(out, "Result: {}", value)?;
    out.flush()?;

    Ok(value)
}
