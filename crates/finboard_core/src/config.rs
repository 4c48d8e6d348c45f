//! Insight service configuration read from the process environment.
//!
//! # Invariants
//! - A missing credential is not a configuration error; it fails only the
//!   insight call that needs it.
//! - An unparsable or zero timeout is rejected.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub const API_KEY_VAR: &str = "API_KEY";
pub const ENDPOINT_VAR: &str = "FINBOARD_INSIGHT_ENDPOINT";
pub const MODEL_VAR: &str = "FINBOARD_INSIGHT_MODEL";
pub const TIMEOUT_VAR: &str = "FINBOARD_INSIGHT_TIMEOUT_SECS";

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Timeout variable is not a positive whole number of seconds.
    InvalidTimeout(String),
    /// Endpoint variable is set but blank.
    EmptyEndpoint,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeout(value) => {
                write!(f, "{TIMEOUT_VAR} must be a positive integer, got `{value}`")
            }
            Self::EmptyEndpoint => write!(f, "{ENDPOINT_VAR} must not be blank"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Clone, PartialEq, Eq)]
pub struct InsightConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

// Keep the credential out of logs and panic messages.
impl std::fmt::Debug for InsightConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl InsightConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    /// - Returns [`ConfigError`] for malformed timeout or blank endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    /// - Returns [`ConfigError`] for malformed timeout or blank endpoint.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_key = lookup(API_KEY_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let endpoint = match lookup(ENDPOINT_VAR) {
            Some(value) if value.trim().is_empty() => return Err(ConfigError::EmptyEndpoint),
            Some(value) => value.trim().trim_end_matches('/').to_string(),
            None => defaults.endpoint,
        };

        let model = lookup(MODEL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.model);

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(value) => parse_timeout(&value)?,
            None => defaults.timeout,
        };

        Ok(Self {
            api_key,
            endpoint,
            model,
            timeout,
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(Duration::from_secs(seconds)),
        _ => Err(ConfigError::InvalidTimeout(value.to_string())),
    }
}
