//! Path utilities and file system helpers

use crate::error::{Result, StorefrontError};
use std::path::PathBuf;

/// Application identifier used for the per-user data directory
pub const APP_IDENTIFIER: &str = "com.furnilayout.storefront";

/// Gets the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|p| p.join(APP_IDENTIFIER))
        .ok_or_else(|| StorefrontError::Config("Could not find app data directory".to_string()))
}

/// Gets the storefront configuration file path
pub fn get_config_path() -> Result<PathBuf> {
    get_app_data_dir().map(|p| p.join("config.json"))
}
