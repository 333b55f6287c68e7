//! `ghostui-web`
//!
//! **Responsibility:** the client shell's settings menu.
//!
//! This crate provides:
//! - The menu state machine and render model (platform-independent)
//! - A headless controller wiring auth, logout and navigation together
//! - The Leptos frontend (`wasm32` only)

pub mod menu;
pub mod navigation;
pub mod settings;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use menu::{MenuState, MenuStateCell};
pub use navigation::Navigator;
pub use settings::{PendingNavigation, SettingsMenu};
pub use view::{EntryAction, EntryKind, Icon, MenuEntry, SettingsView, render};
