//! Reads one arithmetic expression and prints its value.

use std::process::ExitCode;

fn main() -> ExitCode {
    tally::cli::run_calc()
}
