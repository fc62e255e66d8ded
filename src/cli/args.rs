//! CLI argument parsing

use crate::config::OutputFormat;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Count word frequencies in a text file
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Count word frequencies in a text file, optionally computing a factorial")]
#[command(version)]
pub struct Args {
    /// Text file to count words in
    pub textfile: PathBuf,

    /// Compute N! before counting words
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub factorial: Option<i64>,

    /// Number of most frequent words to report
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Evaluate an arithmetic expression
#[derive(Parser, Debug)]
#[command(name = "tally-calc")]
#[command(about = "Evaluate an arithmetic expression read from stdin or --expr")]
#[command(version)]
pub struct CalcArgs {
    /// Expression to evaluate instead of reading a line from stdin
    #[arg(short, long, allow_hyphen_values = true)]
    pub expr: Option<String>,

    /// Maximum nesting depth of the expression
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Verbosity flags shared by both binaries
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct LogArgs {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
