//! Restricted arithmetic expression evaluator
//!
//! Accepts numbers, `+ - * / // % **` and parentheses. Nothing else is
//! tokenized, so there are no names, calls or attribute lookups to abuse.

mod eval;
mod lexer;
mod parser;

pub use eval::Value;
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{BinaryOp, Expr, UnaryOp};

use thiserror::Error;
use tracing::debug;

/// Default bound on nested parentheses and unary operators
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Largest accepted depth bound. Each level costs several parser frames, and
/// this keeps the deepest parse within a 2 MiB thread stack.
pub const MAX_DEPTH_LIMIT: usize = 256;

/// Upper bound on tokens per expression, which also bounds tree depth
pub const MAX_TOKENS: usize = 2048;

/// Expression errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("unexpected '{found}' at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression at position {pos}")]
    UnexpectedEnd { pos: usize },

    #[error("unclosed '(' at position {pos}")]
    UnclosedParen { pos: usize },

    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("expression nested deeper than {max} levels at position {pos}")]
    TooDeep { max: usize, pos: usize },

    #[error("expression has more than {max} tokens")]
    TooLong { max: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("numeric result out of range")]
    Overflow,

    #[error("result is not a real number")]
    NotReal,
}

/// Parses and evaluates expressions under fixed limits
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting bound, clamped to [`MAX_DEPTH_LIMIT`]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }

    /// Parse source into an expression tree
    pub fn parse(&self, source: &str) -> Result<Expr, ExprError> {
        let tokens = tokenize(source)?;
        if tokens.len() > MAX_TOKENS {
            return Err(ExprError::TooLong { max: MAX_TOKENS });
        }
        parser::Parser::new(&tokens, source.len(), self.max_depth).parse()
    }

    /// Parse and evaluate source
    pub fn evaluate(&self, source: &str) -> Result<Value, ExprError> {
        let expr = self.parse(source)?;
        let value = eval::eval(&expr)?;
        debug!("{} = {}", source.trim(), value);
        Ok(value)
    }
}

/// Parse with default limits
pub fn parse(source: &str) -> Result<Expr, ExprError> {
    Evaluator::default().parse(source)
}

/// Evaluate with default limits
pub fn evaluate(source: &str) -> Result<Value, ExprError> {
    Evaluator::default().evaluate(source)
}
