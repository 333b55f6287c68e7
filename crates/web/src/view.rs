//! Render model for the settings menu.
//!
//! This module contains the markup contract shared by the browser component
//! and native tests. It must not depend on browser-only crates.

use ghostui_core::AppConfig;

use crate::menu::MenuState;

pub const CONTAINER_CLASS: &str = "fixed-plugin";
pub const CONTAINER_ACTIVE_CLASS: &str = "fixed-plugin-active";
pub const DROPDOWN_CLASS: &str = "dropdown";
pub const MENU_CLASS: &str = "dropdown-menu";
pub const HEADER_CLASS: &str = "header-title";
pub const ITEM_CLASS: &str = "dropdown-item";
pub const MENU_TITLE: &str = "Settings";

/// Link attributes for entries that open outside the app.
pub const EXTERNAL_TARGET: &str = "_blank";
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// A Font Awesome icon reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    /// Size multiplier (`fa-3x`); `None` keeps the surrounding font size.
    pub scale: Option<u8>,
}

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scale: None,
        }
    }

    pub fn scaled(name: impl Into<String>, scale: u8) -> Self {
        Self {
            name: name.into(),
            scale: Some(scale),
        }
    }

    pub fn class(&self) -> String {
        match self.scale {
            Some(scale) => format!("fas fa-{} fa-{scale}x", self.name),
            None => format!("fas fa-{}", self.name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    HealthChecks,
    SwaggerApi,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    /// Open `href` in a new browsing context.
    External { href: String },
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub kind: EntryKind,
    pub label: String,
    pub icon: Icon,
    pub action: EntryAction,
}

impl MenuEntry {
    fn external(kind: EntryKind, label: &str, icon: &str, href: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
            icon: Icon::new(icon),
            action: EntryAction::External {
                href: href.to_string(),
            },
        }
    }

    pub fn href(&self) -> Option<&str> {
        match &self.action {
            EntryAction::External { href } => Some(href),
            EntryAction::Logout => None,
        }
    }

    pub fn target(&self) -> Option<&'static str> {
        self.href().map(|_| EXTERNAL_TARGET)
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.href().map(|_| EXTERNAL_REL)
    }
}

/// What the settings menu shows for an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub state: MenuState,
    pub trigger: Icon,
    pub title: &'static str,
    /// Empty while the menu is closed.
    pub entries: Vec<MenuEntry>,
}

impl SettingsView {
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn container_class(&self) -> String {
        container_class(self.state)
    }

    pub fn menu(&self) -> Option<&[MenuEntry]> {
        self.is_open().then_some(self.entries.as_slice())
    }
}

pub fn container_class(state: MenuState) -> String {
    if state.is_open() {
        format!("{CONTAINER_CLASS} {CONTAINER_ACTIVE_CLASS}")
    } else {
        CONTAINER_CLASS.to_string()
    }
}

/// The fixed menu entries, in display order.
pub fn menu_entries(config: &AppConfig) -> Vec<MenuEntry> {
    let login = &config.routes.login;
    vec![
        MenuEntry::external(
            EntryKind::HealthChecks,
            "Health Checks",
            "heart",
            &config.links.health_ui,
        ),
        MenuEntry::external(
            EntryKind::SwaggerApi,
            "Swagger API",
            "file",
            &config.links.swagger_docs,
        ),
        MenuEntry {
            kind: EntryKind::Logout,
            label: login.display_name.clone(),
            icon: Icon::new(login.icon.clone()),
            action: EntryAction::Logout,
        },
    ]
}

/// Render decision for the settings menu.
///
/// Unauthenticated users get nothing at all, whatever `state` holds.
pub fn render(
    is_authenticated: bool,
    state: MenuState,
    config: &AppConfig,
) -> Option<SettingsView> {
    if !is_authenticated {
        return None;
    }

    let entries = if state.is_open() {
        menu_entries(config)
    } else {
        Vec::new()
    };

    Some(SettingsView {
        state,
        trigger: Icon::scaled("cog", 3),
        title: MENU_TITLE,
        entries,
    })
}
