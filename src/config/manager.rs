//! Configuration manager for loading application configuration
//!
//! Reads %APPDATA%\SmartHomeSim\config.json (`./SmartHomeSim/config.json` when
//! APPDATA is unset). The file is optional and never written by the simulator.

use crate::config::models::AppConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Name of the per-user data directory
const APP_DIR_NAME: &str = "SmartHomeSim";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Directory holding the configuration file and diagnostic logs
    pub fn data_dir() -> PathBuf {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join(APP_DIR_NAME)
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::data_dir().join("config.json")
    }

    /// Load configuration from the default location
    pub fn load() -> Result<AppConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from `config_path`
    ///
    /// A missing file yields the defaults. A file that fails to parse or
    /// validate is reported with `warn!` and the defaults are used instead.
    /// Only I/O errors on an existing file are returned.
    pub fn load_from(config_path: &Path) -> Result<AppConfig> {
        if !config_path.exists() {
            info!(
                "Configuration file {} not found, using defaults",
                config_path.display()
            );
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(config_path)?;

        let config: AppConfig = match serde_json::from_str(&json) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                return Ok(AppConfig::default());
            }
        };

        if let Err(e) = config.validate() {
            warn!("Invalid configuration, using defaults: {}", e);
            return Ok(AppConfig::default());
        }

        info!("Configuration loaded successfully");
        Ok(config)
    }
}
