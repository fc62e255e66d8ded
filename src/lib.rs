//! Tally - word frequencies, factorials and safe arithmetic
//!
//! Counts words in text files, computes factorials with overflow checks and
//! evaluates arithmetic expressions without executing arbitrary code.

pub mod cli;
pub mod config;
pub mod error;
pub mod expr;
pub mod math;
pub mod report;
pub mod words;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use expr::{evaluate, Evaluator, ExprError, Value};
pub use math::factorial;
pub use words::{count_text, count_word_frequencies, WordFrequencies};
