//! Configuration file handling.
//!
//! Reads from `~/.config/stockrs/stockrs.toml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the inventory backend API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Initial window width.
    #[serde(default = "default_window_width")]
    pub window_width: i32,
    /// Initial window height.
    #[serde(default = "default_window_height")]
    pub window_height: i32,
}

fn default_api_url() -> String {
    stockrs_core::DEFAULT_API_URL.to_string()
}

fn default_window_width() -> i32 {
    1000
}

fn default_window_height() -> i32 {
    650
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl Config {
    /// Load configuration from the config file.
    ///
    /// If `custom_path` is provided, load from that path.
    /// Otherwise, load from the default XDG config location.
    /// Creates a default config file if it doesn't exist (only for default path).
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self> {
        let is_custom = custom_path.is_some();
        let config_path = match custom_path {
            Some(path) => path,
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            // Only create default config for the default path
            if !is_custom {
                let config = Config::default();
                config.save()?;
                tracing::info!("Created default config: {:?}", config);
                return Ok(config);
            } else {
                anyhow::bail!("Config file not found: {}", config_path.display());
            }
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        tracing::info!("Loaded config from {}: {:?}", config_path.display(), config);
        Ok(config)
    }

    /// Save configuration to the config file.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))
    }

    /// Get the path to the config file.
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join("stockrs").join("stockrs.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api_url, stockrs_core::DEFAULT_API_URL);
        assert_eq!(config.window_width, 1000);

        let config: Config = toml::from_str(r#"api_url = "http://inventory.local/api/""#).unwrap();
        assert_eq!(config.api_url, "http://inventory.local/api/");
        assert_eq!(config.window_height, 650);
    }
}
