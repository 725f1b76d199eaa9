//! Application configuration module
//!
//! Handles loading and validating configuration from environment variables.

use serde::Deserialize;
use thiserror::Error;

/// Environment variable holding the bcrypt cost factor
pub const SALT_ROUNDS_VAR: &str = "SALT_ROUNDS";

/// Cost factor used when `SALT_ROUNDS` is not set
pub const DEFAULT_SALT_ROUNDS: u32 = 10;

/// Environment variable selecting the log output format
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load environment variables: {0}")]
    EnvLoad(#[from] dotenvy::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub salt_rounds: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            salt_rounds: DEFAULT_SALT_ROUNDS,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelemetryConfig {
    pub format: LogFormat,
}

/// Complete application settings
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub security: SecurityConfig,
    pub telemetry: TelemetryConfig,
}

impl Settings {
    /// Load settings from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore errors if file not found)
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    ///
    /// `load` passes the process environment; tests pass a closure over a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let salt_rounds = match lookup(SALT_ROUNDS_VAR) {
            Some(raw) => parse_salt_rounds(&raw)?,
            None => DEFAULT_SALT_ROUNDS,
        };

        let format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => parse_log_format(&raw)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            security: SecurityConfig { salt_rounds },
            telemetry: TelemetryConfig { format },
        })
    }
}

/// Cost factor must be a positive integer. The accepted bcrypt range is
/// left to bcrypt itself.
fn parse_salt_rounds(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(rounds) if rounds > 0 => Ok(rounds),
        _ => Err(ConfigError::InvalidValue(format!(
            "{} must be a positive integer, got {:?}",
            SALT_ROUNDS_VAR, raw
        ))),
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "compact" => Ok(LogFormat::Compact),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::InvalidValue(format!(
            "{} must be \"compact\" or \"json\", got {:?}",
            LOG_FORMAT_VAR, raw
        ))),
    }
}
