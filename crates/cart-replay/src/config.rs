//! Driver configuration loaded from environment variables.

use std::path::PathBuf;

use crate::error::CliError;

/// Output format for log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,

    /// One JSON object per line.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Replay configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `text` or `json` (default: `text`)
/// - `CART_EVENTS_FILE` — JSON file holding the events to replay (default: built-in sample)
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub events_file: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: std::env::var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
            events_file: std::env::var_os("CART_EVENTS_FILE").map(PathBuf::from),
        }
    }

    /// Applies command-line arguments on top of the environment.
    ///
    /// A single positional argument names the events file and wins over
    /// `CART_EVENTS_FILE`. Any further argument is rejected.
    pub fn with_args<I>(mut self, args: I) -> Result<Self, CliError>
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        let mut args = args.into_iter().map(Into::into);
        if let Some(path) = args.next() {
            self.events_file = Some(path);
        }
        if let Some(extra) = args.next() {
            return Err(CliError::UnexpectedArgument(extra));
        }
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            events_file: None,
        }
    }
}
