//! Runtime configuration for the companion.
//!
//! Values come from `COMPANION_*` environment variables, optionally seeded
//! from a `.env` file. Anything unset keeps its default.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use validator::{Validate, ValidationError};

use crate::error::AppError;

pub const ENV_TYPING_DELAY_MIN_MS: &str = "COMPANION_TYPING_DELAY_MIN_MS";
pub const ENV_TYPING_DELAY_MAX_MS: &str = "COMPANION_TYPING_DELAY_MAX_MS";
pub const ENV_RNG_SEED: &str = "COMPANION_RNG_SEED";
pub const ENV_SIMULATE_TYPING: &str = "COMPANION_SIMULATE_TYPING";
pub const ENV_LOG_FORMAT: &str = "COMPANION_LOG_FORMAT";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: '{}'", other))),
        }
    }
}

/// Companion settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_delay_window"))]
pub struct CompanionConfig {
    /// Lower bound of the simulated typing delay, in milliseconds.
    #[validate(range(max = 60_000))]
    pub typing_delay_min_ms: u64,
    /// Upper bound (exclusive) of the simulated typing delay, in milliseconds.
    #[validate(range(max = 60_000))]
    pub typing_delay_max_ms: u64,
    /// Fixed seed for reply selection and typing delay. Random when unset.
    pub rng_seed: Option<u64>,
    /// Whether the CLI actually sleeps for the typing delay.
    pub simulate_typing: bool,
    /// Log output format.
    pub log_format: LogFormat,
}

fn validate_delay_window(config: &CompanionConfig) -> Result<(), ValidationError> {
    if config.typing_delay_min_ms > config.typing_delay_max_ms {
        return Err(ValidationError::new("typing_delay_min_exceeds_max"));
    }
    Ok(())
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            typing_delay_min_ms: 1000,
            typing_delay_max_ms: 3000,
            rng_seed: None,
            simulate_typing: true,
            log_format: LogFormat::Pretty,
        }
    }
}

impl CompanionConfig {
    /// Loads `.env` if present, then reads the environment.
    ///
    /// Also returns the path of the applied `.env` file. Logging is not set up
    /// yet at this point, so reporting it is left to the caller.
    pub fn load() -> Result<(Self, Option<PathBuf>), AppError> {
        let env_file = dotenv::dotenv().ok();
        Ok((Self::from_env()?, env_file))
    }

    /// Builds the configuration from the current process environment.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(v) = read_var::<u64>(ENV_TYPING_DELAY_MIN_MS)? {
            config.typing_delay_min_ms = v;
        }
        if let Some(v) = read_var::<u64>(ENV_TYPING_DELAY_MAX_MS)? {
            config.typing_delay_max_ms = v;
        }
        config.rng_seed = read_var::<u64>(ENV_RNG_SEED)?;
        if let Ok(v) = env::var(ENV_SIMULATE_TYPING) {
            config.simulate_typing = parse_bool(ENV_SIMULATE_TYPING, &v)?;
        }
        if let Ok(v) = env::var(ENV_LOG_FORMAT) {
            config.log_format = v.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Typing delay window as durations
    pub fn typing_delay_range(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.typing_delay_min_ms),
            Duration::from_millis(self.typing_delay_max_ms),
        )
    }
}

fn read_var<T>(key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{} = '{}': {}", key, raw, e))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::Config(format!("{}: {}", key, e))),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!("{} = '{}': expected a boolean", key, raw))),
    }
}
