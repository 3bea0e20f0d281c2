#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{Result, WellnessError};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECONDS: f64 = 8.0;
pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const MAX_TIMEOUT_SECONDS: f64 = 60.0;

/// Settings for insight generation. Remote mode is only attempted when
/// `remote_enabled` is set and a non-blank credential is present.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub remote_enabled: bool,
    pub remote_credential: Option<String>,
    pub remote_model_name: String,
    pub timeout_seconds: f64,
    pub remote_endpoint: String,
    pub max_tokens: u32,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            remote_enabled: false,
            remote_credential: None,
            remote_model_name: DEFAULT_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            remote_endpoint: DEFAULT_ENDPOINT.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

// 不要把金鑰印到日誌
impl fmt::Debug for InsightConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsightConfig")
            .field("remote_enabled", &self.remote_enabled)
            .field(
                "remote_credential",
                &self.remote_credential.as_ref().map(|_| "<redacted>"),
            )
            .field("remote_model_name", &self.remote_model_name)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("remote_endpoint", &self.remote_endpoint)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl InsightConfig {
    /// Remote mode with the given credential and defaults for everything else.
    pub fn remote(credential: impl Into<String>) -> Self {
        Self {
            remote_enabled: true,
            remote_credential: Some(credential.into()),
            ..Self::default()
        }
    }

    pub fn credential(&self) -> Option<&str> {
        self.remote_credential
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Remote mode also needs a usable timeout; an out-of-range
    /// `timeout_seconds` keeps the generator local.
    pub fn is_remote_configured(&self) -> bool {
        self.remote_enabled && self.credential().is_some() && self.checked_timeout().is_some()
    }

    /// `None` unless `timeout_seconds` is within (0, 60].
    pub fn checked_timeout(&self) -> Option<Duration> {
        if self.timeout_seconds > 0.0 && self.timeout_seconds <= MAX_TIMEOUT_SECONDS {
            Duration::try_from_secs_f64(self.timeout_seconds).ok()
        } else {
            None
        }
    }

    /// The configured timeout, or the 8 s default when it is out of range.
    pub fn timeout(&self) -> Duration {
        self.checked_timeout()
            .unwrap_or_else(|| Duration::from_secs_f64(DEFAULT_TIMEOUT_SECONDS))
    }

    /// 從環境變數讀取設定
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a key lookup. Reads `WELLNESS_REMOTE_ENABLED`,
    /// `WELLNESS_REMOTE_API_KEY` (or `OPENAI_API_KEY`), `WELLNESS_REMOTE_MODEL`,
    /// `WELLNESS_REMOTE_TIMEOUT_SECONDS` and `WELLNESS_REMOTE_ENDPOINT`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let credential = lookup("WELLNESS_REMOTE_API_KEY").or_else(|| lookup("OPENAI_API_KEY"));
        config.remote_enabled = match lookup("WELLNESS_REMOTE_ENABLED") {
            Some(raw) => parse_bool("WELLNESS_REMOTE_ENABLED", &raw)?,
            None => credential.is_some(),
        };
        config.remote_credential = credential;

        if let Some(model) = lookup("WELLNESS_REMOTE_MODEL") {
            config.remote_model_name = model;
        }
        if let Some(endpoint) = lookup("WELLNESS_REMOTE_ENDPOINT") {
            config.remote_endpoint = endpoint;
        }
        if let Some(raw) = lookup("WELLNESS_REMOTE_TIMEOUT_SECONDS") {
            config.timeout_seconds =
                raw.trim()
                    .parse()
                    .map_err(|_| WellnessError::InvalidConfigValueError {
                        field: "WELLNESS_REMOTE_TIMEOUT_SECONDS".to_string(),
                        value: raw.clone(),
                        reason: "Expected a number of seconds".to_string(),
                    })?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_bool(field: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(WellnessError::InvalidConfigValueError {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "Expected true or false".to_string(),
        }),
    }
}

impl Validate for InsightConfig {
    fn validate(&self) -> Result<()> {
        if !self.timeout_seconds.is_finite() || self.timeout_seconds <= 0.0 {
            return Err(WellnessError::InvalidConfigValueError {
                field: "insight.timeout_seconds".to_string(),
                value: self.timeout_seconds.to_string(),
                reason: "Timeout must be greater than zero".to_string(),
            });
        }
        validate_range(
            "insight.timeout_seconds",
            self.timeout_seconds,
            0.0,
            MAX_TIMEOUT_SECONDS,
        )?;
        validate_range("insight.max_tokens", self.max_tokens, 1, 4096)?;

        if self.remote_enabled {
            validate_url("insight.remote_endpoint", &self.remote_endpoint)?;
            validate_non_empty_string("insight.remote_model_name", &self.remote_model_name)?;
        }
        Ok(())
    }
}
