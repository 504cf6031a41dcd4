//! Storefront configuration: API location, notification mode, timings

use crate::error::{Result, StorefrontError};
use crate::paths::get_config_path;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Runtime override for the API base URL
pub const API_URL_ENV: &str = "FURNILAYOUT_API_URL";

/// Used when neither the build nor the runtime environment names an API
pub const FALLBACK_API_URL: &str = "http://localhost:5000";

/// How long a successfully submitted contact form waits before closing
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 2000;

/// Which notifier the storefront wires into its pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMode {
    /// Every notification is swallowed, confirmations auto-affirm
    #[default]
    Silent,
    /// Notifications go to the log, confirmations auto-affirm
    Log,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorefrontConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u64,
    #[serde(default)]
    pub notifications: NotificationMode,
    /// None leaves the HTTP client's own default in place
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    let builtin = env!("FURNILAYOUT_BUILTIN_API_URL");
    if builtin.is_empty() {
        FALLBACK_API_URL.to_string()
    } else {
        normalize_base_url(builtin)
    }
}

fn default_close_delay_ms() -> u64 {
    DEFAULT_CLOSE_DELAY_MS
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            close_delay_ms: default_close_delay_ms(),
            notifications: NotificationMode::default(),
            request_timeout_secs: None,
        }
    }
}

impl StorefrontConfig {
    pub fn with_api_base_url(mut self, url: impl AsRef<str>) -> Self {
        self.api_base_url = normalize_base_url(url.as_ref());
        self
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Strips whitespace and trailing slashes so paths can be appended verbatim
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Loads the config from the app data dir, then applies the env override
pub fn load_config() -> Result<StorefrontConfig> {
    let config_path = get_config_path()?;
    let mut config = load_config_from(&config_path)?;

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            info!("[Config] API base URL overridden by {}", API_URL_ENV);
            config = config.with_api_base_url(url);
        }
    }

    Ok(config)
}

/// Reads a config file, falling back to defaults when it does not exist
pub fn load_config_from(path: &Path) -> Result<StorefrontConfig> {
    if !path.exists() {
        return Ok(StorefrontConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| StorefrontError::Config(format!("Failed to read config: {}", e)))?;
    let mut config: StorefrontConfig = serde_json::from_str(&content)
        .map_err(|e| StorefrontError::Config(format!("Failed to parse config: {}", e)))?;

    let normalized = normalize_base_url(&config.api_base_url);
    if normalized.is_empty() {
        warn!("[Config] Empty api_base_url in {}, using default", path.display());
        config.api_base_url = default_api_base_url();
    } else {
        config.api_base_url = normalized;
    }

    Ok(config)
}

pub fn save_config(config: &StorefrontConfig) -> Result<()> {
    save_config_to(&get_config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &StorefrontConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| StorefrontError::Config(format!("Failed to create directory: {}", e)))?;
    }
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| StorefrontError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, content)
        .map_err(|e| StorefrontError::Config(format!("Failed to save config: {}", e)))
}
