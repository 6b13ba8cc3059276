//! Configuration service for reading and editing the configuration file

use crate::AppError;
use crate::api::client::RelayClient;
use crate::error::ConfigError;
use crate::storage::config::Config;
use crate::utils::validation::validate_url;
use std::path::PathBuf;

/// Keys accepted by [`ConfigService::set`].
pub const SETTABLE_KEYS: &[&str] = &[
    "relay.endpoint",
    "relay.timeout_secs",
    "layout.breakpoint",
    "layout.lookahead_rows",
    "layout.drawer_width",
];

/// Configuration service for managing application configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    /// Create new ConfigService instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Relay client for the effective endpoint
    pub fn relay_client(&self) -> Result<RelayClient, AppError> {
        let endpoint = self.config.relay_endpoint();
        validate_url("relay.endpoint", &endpoint)?;
        Ok(RelayClient::with_timeout(
            endpoint,
            self.config.relay.timeout_secs,
        )?)
    }

    /// Set a dotted key such as `layout.breakpoint`
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        match key {
            "relay.endpoint" => {
                validate_url(key, value)?;
                self.config.relay.endpoint = Some(value.to_string());
            }
            "relay.timeout_secs" => self.config.relay.timeout_secs = parse_number(key, value)?,
            "layout.breakpoint" => self.config.layout.breakpoint = parse_number(key, value)?,
            "layout.lookahead_rows" => {
                self.config.layout.lookahead_rows = parse_number(key, value)?
            }
            "layout.drawer_width" => self.config.layout.drawer_width = parse_number(key, value)?,
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, AppError> {
        toml::to_string_pretty(&self.config).map_err(|e| {
            AppError::Config(ConfigError::InvalidValue {
                field: "config".to_string(),
                value: String::new(),
                reason: e.to_string(),
            })
        })
    }

    /// Save configuration to file
    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| {
        AppError::Config(ConfigError::InvalidValue {
            field: key.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_layout_values() {
        let mut service = ConfigService::new(Config::default());
        service
            .set("layout.breakpoint", "120")
            .expect("valid breakpoint");
        service
            .set("layout.drawer_width", "28")
            .expect("valid width");

        assert_eq!(service.config().layout.breakpoint, 120);
        assert_eq!(service.config().layout.drawer_width, 28);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut service = ConfigService::new(Config::default());
        assert!(matches!(
            service.set("layout.breakpoint", "wide"),
            Err(AppError::Config(ConfigError::InvalidValue { .. }))
        ));
        assert!(matches!(
            service.set("relay.endpoint", "formspree.io/f/abc"),
            Err(AppError::Config(ConfigError::InvalidValue { .. }))
        ));
        assert!(matches!(
            service.set("theme", "dark"),
            Err(AppError::Config(ConfigError::UnknownKey { .. }))
        ));
    }

    #[test]
    fn test_every_settable_key_is_accepted() {
        let mut service = ConfigService::new(Config::default());
        for key in SETTABLE_KEYS {
            let value = if *key == "relay.endpoint" {
                "https://relay.example.test/f/abc"
            } else {
                "12"
            };
            assert!(service.set(key, value).is_ok(), "{} rejected", key);
        }
    }

    #[test]
    fn test_to_toml_contains_sections() {
        let service = ConfigService::new(Config::default());
        let rendered = service.to_toml().expect("render config");
        assert!(rendered.contains("[relay]"));
        assert!(rendered.contains("[layout]"));
    }

    #[test]
    fn test_save_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");

        let mut service = ConfigService::new(Config::default());
        service
            .set("relay.endpoint", "https://relay.example.test/f/abc")
            .expect("valid endpoint");
        service
            .save_config(Some(path.clone()))
            .expect("Failed to save config");

        let loaded = Config::load(Some(path)).expect("Failed to load config");
        assert_eq!(
            loaded.relay.endpoint.as_deref(),
            Some("https://relay.example.test/f/abc")
        );
    }
}
