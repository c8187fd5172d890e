pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::domain::model::ElementIds;
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_non_empty_string, validate_range, validate_url, Validate,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::path::PathBuf;
    use std::time::Duration;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "qr-refresh")]
    #[command(about = "Keeps an attendance session QR code fresh on a display")]
    pub struct CliConfig {
        /// Base URL of the attendance server
        #[arg(long, default_value = "http://localhost:8000")]
        pub base_url: String,

        /// Path of the session display page, e.g. /courses/12/sessions/99/display/
        #[arg(long, required_unless_present = "config")]
        pub page_path: Option<String>,

        /// Cookie header forwarded with each refresh request
        #[arg(long, default_value = "")]
        pub cookie: String,

        /// Name of the anti-forgery cookie
        #[arg(long, default_value = "csrftoken")]
        pub csrf_cookie: String,

        /// Requested QR validity in minutes
        #[arg(long, default_value = "10")]
        pub duration: u32,

        /// Seconds between countdown ticks
        #[arg(long, default_value = "1")]
        pub interval_secs: u64,

        /// Load settings from a TOML file instead of flags
        #[arg(long)]
        pub config: Option<PathBuf>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn page_path(&self) -> &str {
            self.page_path.as_deref().unwrap_or("")
        }

        fn cookie_header(&self) -> &str {
            &self.cookie
        }

        fn csrf_cookie_name(&self) -> &str {
            &self.csrf_cookie
        }

        fn qr_duration(&self) -> u32 {
            self.duration
        }

        fn tick_interval(&self) -> Duration {
            Duration::from_secs(self.interval_secs)
        }

        fn elements(&self) -> ElementIds {
            ElementIds::default()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("base_url", &self.base_url)?;
            validate_non_empty_string("page_path", self.page_path())?;
            validate_non_empty_string("csrf_cookie", &self.csrf_cookie)?;
            validate_range("duration", self.duration, 1, 120)?;
            validate_range("interval_secs", self.interval_secs, 1, 60)?;
            Ok(())
        }
    }

}
