use crate::DEFAULT_USER_AGENT;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "http_client.json";
pub const CONFIG_VERSION: u32 = 1;

const MAX_TIMEOUT_MS: u64 = 600_000;

// ============================================
// CONFIG STRUCTS
// ============================================

/// Settings for the network transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Connection establishment timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_timeout_ms() -> u64 {
    30_000
}
fn default_connect_timeout_ms() -> u64 {
    10_000
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl TransportConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Load config from {config_dir}/http_client.json.
    ///
    /// # Returns
    ///
    /// Returns defaults if the file is missing.
    /// Returns `Err(ConfigError)` if the file exists but is unreadable, corrupted or invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: TransportConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/http_client.json using atomic write.
    ///
    /// Uses temp file + rename so a crash never leaves a half-written file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation, serialization,
    /// write or rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is out of range.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if self.timeout_ms == 0 || self.timeout_ms > MAX_TIMEOUT_MS {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout: {}ms (must be 1-{MAX_TIMEOUT_MS})",
                    self.timeout_ms
                ),
            });
        }

        // A connect timeout beyond the request timeout could never fire
        if self.connect_timeout_ms == 0 || self.connect_timeout_ms > self.timeout_ms {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid connect timeout: {}ms (must be 1-{})",
                    self.connect_timeout_ms, self.timeout_ms
                ),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "user_agent cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
