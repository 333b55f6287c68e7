//! Named client-side routes.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// A route the application can navigate to, with the label and icon used
/// wherever the route is offered as a menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub path: String,
    pub display_name: String,
    /// Icon identifier (Font Awesome name without the `fa-` prefix).
    pub icon: String,
}

impl RouteDescriptor {
    pub fn new(
        path: impl Into<String>,
        display_name: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            display_name: display_name.into(),
            icon: icon.into(),
        }
    }

    /// The login route. Its display name doubles as the logout entry label.
    pub fn login() -> Self {
        Self::new("/", "Logout", "sign-out-alt")
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.path.starts_with('/') {
            return Err(ConfigError::invalid(format!(
                "route path must start with '/': {:?}",
                self.path
            )));
        }
        if self.display_name.trim().is_empty() {
            return Err(ConfigError::missing(format!(
                "display name for route {}",
                self.path
            )));
        }
        if self.icon.trim().is_empty() {
            return Err(ConfigError::missing(format!("icon for route {}", self.path)));
        }
        Ok(())
    }
}

/// Routes the settings menu depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesConfig {
    pub login: RouteDescriptor,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login: RouteDescriptor::login(),
        }
    }
}
