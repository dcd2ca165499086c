//! Startup configuration read from environment-style key/value settings

use crate::settings::{Settings, MODEL_OPTIONS};
use aetheria_core::Error;
use aetheria_providers::constants::OPENAI_DEFAULT_BASE_URL;
use aetheria_providers::OpenAIConfig;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default completion length in tokens
pub const DEFAULT_MAX_TOKENS: u32 = 512;
/// Default transcript ceiling in tokens
pub const DEFAULT_TOKEN_BUDGET: usize = 4096;
/// Default nucleus sampling mass
pub const DEFAULT_TOP_P: f32 = 1.0;

/// Session configuration
///
/// | key            | default                       |
/// |----------------|-------------------------------|
/// | `API_KEY`      | required                      |
/// | `BASE_URL`     | `https://api.openai.com/v1`   |
/// | `MODEL`        | first of [`MODEL_OPTIONS`]    |
/// | `TEMPERATURE`  | 0.7                           |
/// | `MAX_TOKENS`   | 512                           |
/// | `TOKEN_BUDGET` | 4096                          |
/// | `TOP_P`        | 1.0                           |
#[derive(Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub token_budget: usize,
    pub top_p: f32,
}

impl Config {
    /// Read the configuration from the process environment, loading a
    /// `.env` file first when one exists.
    pub fn from_env() -> Result<Self, Error> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded environment file"),
            Err(e) => debug!(error = %e, "no environment file loaded"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get("API_KEY")
            .ok_or_else(|| Error::Configuration("API_KEY is not set".to_string()))?;

        let config = Self {
            api_key,
            base_url: get("BASE_URL").unwrap_or_else(|| OPENAI_DEFAULT_BASE_URL.to_string()),
            model: get("MODEL").unwrap_or_else(|| MODEL_OPTIONS[0].to_string()),
            temperature: parse_or("TEMPERATURE", get("TEMPERATURE"), DEFAULT_TEMPERATURE)?,
            max_tokens: parse_or("MAX_TOKENS", get("MAX_TOKENS"), DEFAULT_MAX_TOKENS)?,
            token_budget: parse_or("TOKEN_BUDGET", get("TOKEN_BUDGET"), DEFAULT_TOKEN_BUDGET)?,
            top_p: parse_or("TOP_P", get("TOP_P"), DEFAULT_TOP_P)?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(Error::Configuration(
                "TEMPERATURE must be within [0, 1]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(Error::Configuration("TOP_P must be within [0, 1]".to_string()));
        }
        if self.max_tokens == 0 {
            return Err(Error::Configuration(
                "MAX_TOKENS must be at least 1".to_string(),
            ));
        }
        if self.token_budget == 0 {
            return Err(Error::Configuration(
                "TOKEN_BUDGET must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The initial settings surface values
    pub fn settings(&self) -> Result<Settings, Error> {
        Settings::new(
            self.model.clone(),
            self.temperature,
            self.max_tokens,
            self.top_p,
        )
    }

    /// Connection details for the completion service
    pub fn provider_config(&self) -> OpenAIConfig {
        OpenAIConfig::new(self.api_key.clone()).with_base_url(self.base_url.clone())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("token_budget", &self.token_budget)
            .field("top_p", &self.top_p)
            .finish()
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T, Error>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|e| Error::Configuration(format!("{} has invalid value {:?}: {}", key, raw, e))),
    }
}
