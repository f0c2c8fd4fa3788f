use thiserror::Error;

/// Application-wide result type
pub type Result<T> = anyhow::Result<T>;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No Seerr API key was provided. Pass --api-key or set SEERR_API_KEY.")]
    MissingApiKey,

    #[error("No Seerr URL was provided. Pass --url or set SEERR_URL.")]
    MissingUrl,
}

/// API-specific errors with typed variants for matching
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Seerr API error: {0}")]
    Seerr(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A decoded response record failed required-field or type checks
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' is invalid: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
