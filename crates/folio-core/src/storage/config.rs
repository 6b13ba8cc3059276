//! Configuration management
//!
//! Read from `~/.config/folio/config.toml` (or an explicit path). Every value
//! has a default, so a missing file is not an error.
//! Relay endpoint priority: FOLIO_RELAY_URL environment variable > config.toml > built-in

use super::Result;
use crate::api::client::{DEFAULT_RELAY_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::core::navigation::DEFAULT_BREAKPOINT;
use crate::core::profile::Profile;
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const RELAY_URL_ENV: &str = "FOLIO_RELAY_URL";

/// Form relay settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Terminal layout settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Terminal width (columns) below which the mobile layout is used.
    pub breakpoint: u32,
    /// Rows probed below the scroll offset when tracking the active section.
    pub lookahead_rows: u32,
    /// Width of the pinned desktop drawer.
    pub drawer_width: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            lookahead_rows: 4,
            drawer_width: 32,
        }
    }
}

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub relay: RelayConfig,
    pub layout: LayoutConfig,
    pub profile: Profile,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content =
            toml::to_string_pretty(self).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        Ok(home_dir.join(".config").join("folio").join("config.toml"))
    }

    /// Relay endpoint with environment override and built-in fallback
    pub fn relay_endpoint(&self) -> String {
        std::env::var(RELAY_URL_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.relay.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string())
    }
}
