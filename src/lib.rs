pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::toml_config::TomlConfig;

pub use crate::core::{
    backend::HttpBackend, controller::RefreshController, display_loop::DisplayLoop,
    locator::locate_session, surface::PageSurface,
};
pub use crate::domain::model::{ElementIds, RefreshResponse, SessionLocator};
pub use crate::utils::error::{QrError, Result};
