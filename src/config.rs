use crate::error::{Error, Result};
use crate::expr::MAX_DEPTH_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tally.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub tokenizer: TokenizerConfig,
    pub calc: CalcConfig,
}

/// Word report settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub top_n: usize,
    pub format: OutputFormat,
}

/// How raw text is split into words
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Characters stripped from both ends of every token
    pub strip_chars: String,
    pub lowercase: bool,
}

/// Expression evaluator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Maximum nesting of parentheses and unary operators
    pub max_depth: usize,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            format: OutputFormat::default(),
        }
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            strip_chars: ".,!?;:\"'()[]".to_string(),
            lowercase: true,
        }
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        top: Option<usize>,
        format: Option<OutputFormat>,
        max_depth: Option<usize>,
    ) {
        if let Some(n) = top {
            self.report.top_n = n;
        }

        if let Some(fmt) = format {
            self.report.format = fmt;
        }

        if let Some(d) = max_depth {
            self.calc.max_depth = d;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.report.top_n == 0 {
            return Err(Error::config_validation("top_n must be at least 1"));
        }

        if self.calc.max_depth == 0 {
            return Err(Error::config_validation("max_depth must be at least 1"));
        }

        if self.calc.max_depth > MAX_DEPTH_LIMIT {
            return Err(Error::config_validation(format!(
                "max_depth cannot exceed {}",
                MAX_DEPTH_LIMIT
            )));
        }

        if self.tokenizer.strip_chars.chars().any(char::is_whitespace) {
            return Err(Error::config_validation(
                "strip_chars cannot contain whitespace",
            ));
        }

        Ok(())
    }
}
