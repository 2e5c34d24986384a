// src/config.rs
use crate::domain::slug::{CheckFailurePolicy, DEFAULT_MAX_ATTEMPTS};
use std::env;
use thiserror::Error;

/// Name under which the built-in normalizer is registered.
pub const DEFAULT_GENERATOR: &str = "default";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlugConfig {
    enabled: bool,
    generator: String,
    max_attempts: u32,
    check_failure_policy: CheckFailurePolicy,
    database_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://slugs.db?mode=rwc".into()
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            generator: DEFAULT_GENERATOR.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            check_failure_policy: CheckFailurePolicy::default(),
            database_url: default_database_url(),
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!("{key} must be a boolean, got `{other}`"))),
    }
}

impl SlugConfig {
    /// Build configuration from environment variables, reading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Missing keys fall
    /// back to defaults; present but malformed values are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let enabled = lookup("SLUG_ENABLED")
            .map(|v| parse_flag("SLUG_ENABLED", &v))
            .transpose()?
            .unwrap_or(defaults.enabled);

        let generator = lookup("SLUG_GENERATOR")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.generator);

        let max_attempts = match lookup("SLUG_MAX_ATTEMPTS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => {
                    return Err(ConfigError::Invalid(
                        "SLUG_MAX_ATTEMPTS must be a positive integer".into(),
                    ));
                }
            },
            None => defaults.max_attempts,
        };

        let check_failure_policy = lookup("SLUG_CHECK_FAILURE_POLICY")
            .map(|v| v.parse::<CheckFailurePolicy>().map_err(ConfigError::Invalid))
            .transpose()?
            .unwrap_or(defaults.check_failure_policy);

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        Ok(Self {
            enabled,
            generator,
            max_attempts,
            check_failure_policy,
            database_url,
        })
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn generator(&self) -> &str {
        &self.generator
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn check_failure_policy(&self) -> CheckFailurePolicy {
        self.check_failure_policy
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_generator(mut self, name: impl Into<String>) -> Self {
        self.generator = name.into();
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    #[must_use]
    pub fn with_check_failure_policy(mut self, policy: CheckFailurePolicy) -> Self {
        self.check_failure_policy = policy;
        self
    }

    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }
}
