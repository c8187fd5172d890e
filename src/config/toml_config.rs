use crate::domain::model::ElementIds;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
const DEFAULT_QR_DURATION: u32 = 10;
const DEFAULT_INTERVAL_SECS: u64 = 1;

/// File-based configuration for a permanently installed display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub page: PageConfig,
    #[serde(default)]
    pub elements: ElementIds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
    pub cookie: Option<String>,
    pub csrf_cookie: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub path: String,
    pub duration: Option<u32>,
    pub interval_secs: Option<u64>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.server.base_url
    }

    fn page_path(&self) -> &str {
        &self.page.path
    }

    fn cookie_header(&self) -> &str {
        self.server.cookie.as_deref().unwrap_or("")
    }

    fn csrf_cookie_name(&self) -> &str {
        self.server
            .csrf_cookie
            .as_deref()
            .unwrap_or(DEFAULT_CSRF_COOKIE)
    }

    fn qr_duration(&self) -> u32 {
        self.page.duration.unwrap_or(DEFAULT_QR_DURATION)
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.page.interval_secs.unwrap_or(DEFAULT_INTERVAL_SECS))
    }

    fn elements(&self) -> ElementIds {
        self.elements.clone()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("server.base_url", &self.server.base_url)?;
        validate_non_empty_string("page.path", &self.page.path)?;
        validate_range("page.duration", self.qr_duration(), 1, 120)?;
        validate_range(
            "page.interval_secs",
            self.tick_interval().as_secs(),
            1,
            60,
        )?;
        Ok(())
    }
}
