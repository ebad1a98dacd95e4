//! Application configuration
//!
//! Configuration loaded from `.marketplace-tui.toml`, with environment
//! overrides applied on top.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable overriding `api.base_url`
pub const ENV_API_URL: &str = "MARKET_API_URL";
/// Environment variable overriding `log_actions` (`1`/`true`/`0`/`false`)
pub const ENV_LOG_ACTIONS: &str = "MARKET_LOG_ACTIONS";

/// Application configuration loaded from `.marketplace-tui.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Credentials used by the "Demo user" button
    #[serde(default)]
    pub demo_login: DemoLogin,

    /// Log every dispatched action (development aid)
    #[serde(default = "default_log_actions")]
    pub log_actions: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Root of the REST API, e.g. `http://localhost:5000/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Demo account shown to visitors without a session
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct DemoLogin {
    /// Hide the demo button entirely when false
    #[serde(default = "default_demo_enabled")]
    pub enabled: bool,

    #[serde(default = "default_demo_email")]
    pub email: String,

    #[serde(default = "default_demo_password")]
    pub password: String,
}

impl std::fmt::Debug for DemoLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoLogin")
            .field("enabled", &self.enabled)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_demo_enabled() -> bool {
    true
}

fn default_demo_email() -> String {
    "demo@aa.io".to_string()
}

fn default_demo_password() -> String {
    "password".to_string()
}

fn default_log_actions() -> bool {
    cfg!(debug_assertions)
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for DemoLogin {
    fn default() -> Self {
        Self {
            enabled: default_demo_enabled(),
            email: default_demo_email(),
            password: default_demo_password(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            demo_login: DemoLogin::default(),
            log_actions: default_log_actions(),
        }
    }
}

impl AppConfig {
    /// Load config from file (see `load_config_file`), then apply `.env` and
    /// environment overrides
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }

        let mut config = Self::from_file();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    fn from_file() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Apply overrides from a variable lookup (the process environment in production)
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            log::info!("Using API base url from {}", ENV_API_URL);
            self.api.base_url = url;
        }

        if let Some(value) = lookup(ENV_LOG_ACTIONS) {
            match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.log_actions = true,
                "0" | "false" | "no" | "off" => self.log_actions = false,
                other => log::warn!("Ignoring {}={}", ENV_LOG_ACTIONS, other),
            }
        }
    }
}
