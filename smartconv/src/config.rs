//! Session configuration
//!
//! Built with the `with_*` builders or read from `SMARTCONV_*` environment
//! variables. Invalid values are logged and replaced by defaults.

use std::env;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use crate::history::DEFAULT_CAPACITY;

pub const ENV_MODE: &str = "SMARTCONV_MODE";
pub const ENV_PRECISION: &str = "SMARTCONV_PRECISION";
pub const ENV_HISTORY: &str = "SMARTCONV_HISTORY";
pub const ENV_OUTPUT: &str = "SMARTCONV_OUTPUT";

/// Largest number of decimal places accepted for display
const MAX_PRECISION: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Input mode of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Free-text requests ("10 kg to lb")
    Smart,
    /// Structured requests (category, from, to, value)
    #[default]
    Classic,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Smart => Mode::Classic,
            Mode::Classic => Mode::Smart,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Smart => "smart",
            Mode::Classic => "classic",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "smart" => Ok(Mode::Smart),
            "classic" => Ok(Mode::Classic),
            _ => Err(ConfigError::InvalidValue {
                var: ENV_MODE,
                value: s.to_string(),
                reason: "expected smart or classic",
            }),
        }
    }
}

/// How outcomes are written by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                var: ENV_OUTPUT,
                value: s.to_string(),
                reason: "expected text or json",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Mode a new session starts in
    pub mode: Mode,
    /// Decimal places of the converted value in display strings
    pub precision: usize,
    pub history_capacity: usize,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            precision: smartconv_units::DISPLAY_PRECISION,
            history_capacity: DEFAULT_CAPACITY,
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// missing or invalid values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(ENV_MODE) {
            match raw.parse() {
                Ok(mode) => config.mode = mode,
                Err(e) => warn!(error = %e, "ignoring configuration value"),
            }
        }

        if let Some(raw) = lookup(ENV_PRECISION) {
            match parse_bounded(ENV_PRECISION, &raw, 0, MAX_PRECISION) {
                Ok(precision) => config.precision = precision,
                Err(e) => warn!(error = %e, "ignoring configuration value"),
            }
        }

        if let Some(raw) = lookup(ENV_HISTORY) {
            match parse_bounded(ENV_HISTORY, &raw, 1, usize::MAX) {
                Ok(capacity) => config.history_capacity = capacity,
                Err(e) => warn!(error = %e, "ignoring configuration value"),
            }
        }

        if let Some(raw) = lookup(ENV_OUTPUT) {
            match raw.parse() {
                Ok(output) => config.output = output,
                Err(e) => warn!(error = %e, "ignoring configuration value"),
            }
        }

        config
    }
}

fn parse_bounded(var: &'static str, raw: &str, min: usize, max: usize) -> Result<usize, ConfigError> {
    let n: usize = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
        reason: "expected a non-negative integer",
    })?;

    if n < min || n > max {
        return Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            reason: "out of range",
        });
    }
    Ok(n)
}
