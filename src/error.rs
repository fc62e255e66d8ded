use crate::expr::ExprError;
use std::path::PathBuf;
use thiserror::Error;

/// Tally error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("No such file: {0}")]
    FileNotFound(PathBuf),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0} overflows a 128-bit integer")]
    Overflow(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expression error: {0}")]
    Expression(#[from] ExprError),

    #[error("Error computing factorial: {0}")]
    Factorial(#[source] Box<Error>),

    #[error("Error reading '{}': {}", .path.display(), .source)]
    ReadText {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

/// Result type alias for Tally operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Wrap an error raised while computing a factorial
    pub fn factorial(source: Error) -> Self {
        Error::Factorial(Box::new(source))
    }

    /// Wrap an error raised while reading or counting a text file
    pub fn read_text(path: impl Into<PathBuf>, source: Error) -> Self {
        Error::ReadText {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Whether the message already names the failing step
    pub fn has_context(&self) -> bool {
        matches!(self, Error::Factorial(_) | Error::ReadText { .. })
    }
}
