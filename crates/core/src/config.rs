//! Application configuration for the client shell.
//!
//! Values come from three places, in order of preference for a given build:
//! an embedded JSON document (browser bundles), environment variables (native
//! dev/test processes), or the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::route::RoutesConfig;

pub const ENV_HEALTH_UI_URL: &str = "GHOSTUI_HEALTH_UI_URL";
pub const ENV_SWAGGER_DOCS_URL: &str = "GHOSTUI_SWAGGER_DOCS_URL";
pub const ENV_API_BASE: &str = "GHOSTUI_API_BASE";

const DEFAULT_HEALTH_UI_URL: &str = "/healthchecks-ui";
const DEFAULT_SWAGGER_DOCS_URL: &str = "/docs";
const DEFAULT_API_BASE: &str = "/api";

/// External pages served by the backend and linked from the settings menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLinks {
    pub health_ui: String,
    pub swagger_docs: String,
}

impl Default for ExternalLinks {
    fn default() -> Self {
        Self {
            health_ui: DEFAULT_HEALTH_UI_URL.to_string(),
            swagger_docs: DEFAULT_SWAGGER_DOCS_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub links: ExternalLinks,
    pub routes: RoutesConfig,
    /// Prefix for backend API calls (e.g. `/api`).
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            links: ExternalLinks::default(),
            routes: RoutesConfig::default(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON document. Omitted fields fall back to defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Build from process environment variables, falling back to defaults.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment-shaped).
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_HEALTH_UI_URL) {
            config.links.health_ui = url;
        }
        if let Some(url) = lookup(ENV_SWAGGER_DOCS_URL) {
            config.links.swagger_docs = url;
        }
        if let Some(base) = lookup(ENV_API_BASE) {
            config.api_base = base;
        }

        config.validate()?;
        tracing::debug!(
            health_ui = %config.links.health_ui,
            swagger_docs = %config.links.swagger_docs,
            api_base = %config.api_base,
            "loaded app config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.links.health_ui.trim().is_empty() {
            return Err(ConfigError::missing("links.health_ui"));
        }
        if self.links.swagger_docs.trim().is_empty() {
            return Err(ConfigError::missing("links.swagger_docs"));
        }
        if !self.api_base.starts_with('/') && !self.api_base.starts_with("http") {
            return Err(ConfigError::invalid(format!(
                "api_base must be a path or absolute URL: {:?}",
                self.api_base
            )));
        }
        self.routes.login.validate()
    }

    /// Full URL of a backend API endpoint, e.g. `api_url("/auth/logout")`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}
