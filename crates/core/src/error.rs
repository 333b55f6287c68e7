//! Configuration error model.

use thiserror::Error;

/// Result type used when loading or validating configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration-level error.
///
/// Covers values supplied from the environment or an embedded JSON document.
/// Runtime UI interactions never produce these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required value was empty.
    #[error("missing value: {0}")]
    Missing(String),

    /// A value was present but malformed (e.g. a route path without a leading `/`).
    #[error("invalid value: {0}")]
    Invalid(String),

    /// The configuration document could not be parsed.
    #[error("parse failed: {0}")]
    Parse(String),
}

impl ConfigError {
    pub fn missing(msg: impl Into<String>) -> Self {
        Self::Missing(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
