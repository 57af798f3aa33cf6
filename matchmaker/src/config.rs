use serde::Deserialize;
use std::env;

use crate::error::{MatchError, Result};
use crate::intelligence::DEFAULT_PRECISION;

/// Largest rounding precision accepted for scores.
pub const MAX_PRECISION: u32 = 9;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub scoring: ScoringConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    /// JSON user directory; the built-in sample is used when unset.
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoringConfig {
    pub precision: u32,
    /// Entries scoring below this are left out of the output.
    pub min_score: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            min_score: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {s}")),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Read separately so the subscriber can be installed before the rest
    /// of the configuration logs its warnings.
    pub fn from_env() -> Self {
        Self {
            format: parse_env_or("MATCHMAKER_LOG_FORMAT", LogFormat::Pretty),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig {
                path: env::var("MATCHMAKER_INPUT")
                    .ok()
                    .filter(|path| !path.trim().is_empty()),
            },
            scoring: ScoringConfig {
                precision: parse_env_or("MATCHMAKER_PRECISION", DEFAULT_PRECISION),
                min_score: parse_env_or("MATCHMAKER_MIN_SCORE", 0.0),
            },
            logging: LoggingConfig::from_env(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.scoring.precision > MAX_PRECISION {
            return Err(MatchError::Validation(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.scoring.precision
            )));
        }
        if !(0.0..=1.0).contains(&self.scoring.min_score) {
            return Err(MatchError::Validation(format!(
                "min score must be within [0, 1], got {}",
                self.scoring.min_score
            )));
        }
        Ok(())
    }
}
