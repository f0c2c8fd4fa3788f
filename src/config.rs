use std::env;

use crate::error::ConfigError;

pub const API_KEY_ENV: &str = "SEERR_API_KEY";
pub const URL_ENV: &str = "SEERR_URL";

/// Resolved connection settings for the Seerr server
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Resolve credentials from explicit CLI values, falling back to the
    /// environment. Fails before any network call when either is missing.
    pub fn resolve(api_key: Option<String>, url: Option<String>) -> Result<Self, ConfigError> {
        let api_key =
            pick(api_key, env::var(API_KEY_ENV).ok()).ok_or(ConfigError::MissingApiKey)?;
        let url = pick(url, env::var(URL_ENV).ok()).ok_or(ConfigError::MissingUrl)?;

        Ok(Self {
            api_key,
            base_url: api_base_url(&url),
        })
    }
}

/// Explicit value wins over the environment; empty strings count as unset.
fn pick(explicit: Option<String>, env: Option<String>) -> Option<String> {
    explicit
        .filter(|v| !v.is_empty())
        .or(env.filter(|v| !v.is_empty()))
}

/// Strip any trailing slash and append the fixed API version prefix.
fn api_base_url(url: &str) -> String {
    format!("{}/api/v1", url.trim_end_matches('/'))
}
