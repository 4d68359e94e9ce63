//! Process configuration, read once at startup.

use std::fmt;

use highergov_api::DEFAULT_BASE_URL;
use thiserror::Error;

use crate::translate::MissingFilterPolicy;

pub const API_KEY_VAR: &str = "HIGHERGOV_API_KEY";
pub const BASE_URL_VAR: &str = "HIGHERGOV_BASE_URL";
pub const POLICY_VAR: &str = "HIGHERGOV_MISSING_FILTER_POLICY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HIGHERGOV_API_KEY environment variable required")]
    MissingApiKey,
    #[error("HIGHERGOV_BASE_URL must start with http:// or https://, got `{0}`")]
    InvalidBaseUrl(String),
    #[error("HIGHERGOV_MISSING_FILTER_POLICY must be `default` or `reject`, got `{0}`")]
    InvalidPolicy(String),
}

/// Immutable settings shared by every call.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub missing_filter_policy: MissingFilterPolicy,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("missing_filter_policy", &self.missing_filter_policy)
            .finish()
    }
}

impl Config {
    /// Configuration for the production API with the default policy.
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            missing_filter_policy: MissingFilterPolicy::default(),
        }
    }

    /// Reads the process environment, loading a `.env` file first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = match lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                let url = url.trim().to_string();
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::InvalidBaseUrl(url));
                }
                url
            }
            None => DEFAULT_BASE_URL.to_string(),
        };

        let missing_filter_policy = match lookup(POLICY_VAR).filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw
                .parse::<MissingFilterPolicy>()
                .map_err(|_| ConfigError::InvalidPolicy(raw.clone()))?,
            None => MissingFilterPolicy::default(),
        };

        Ok(Self {
            api_key,
            base_url,
            missing_filter_policy,
        })
    }
}
