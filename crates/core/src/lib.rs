//! `ghostui-core`: configuration and shared building blocks.
//!
//! This crate contains **pure** types (no browser or runtime concerns) so it
//! compiles for both native test targets and `wasm32`.

pub mod config;
pub mod error;
pub mod route;

pub use config::{AppConfig, ExternalLinks};
pub use error::{ConfigError, ConfigResult};
pub use route::{RouteDescriptor, RoutesConfig};
