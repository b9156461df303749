//! App configuration (stored in a config file, not on the server)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// App configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
        }
    }
}

/// Resolve the config file path (env override first, then config dir).
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("WISHLINK_CONFIG_PATH") {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    let config_dir = dirs::config_dir()
        .ok_or_else(|| Error::config("could not determine the platform config directory"))?;
    Ok(config_dir.join("wishlink").join("config.json"))
}

impl AppConfig {
    /// Load the config. Precedence: `WISHLINK_API_URL` env var, then the
    /// config file, then the built-in default.
    pub fn load() -> Result<Self> {
        let mut config = match get_config_path() {
            Ok(path) if path.exists() => {
                let contents = fs::read_to_string(&path)?;
                serde_json::from_str(&contents)
                    .map_err(|e| Error::config(format!("unreadable config file: {}", e)))?
            }
            _ => AppConfig::default(),
        };
        if let Ok(url) = std::env::var("WISHLINK_API_URL") {
            if !url.is_empty() {
                config.api_base_url = url;
            }
        }
        Ok(config)
    }

    /// Write the config file, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = get_config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        log::info!("Config written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = AppConfig::default();
        assert!(config.api_base_url.starts_with("http"));
        assert!(config.api_base_url.ends_with("/api"));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = AppConfig {
            api_base_url: "https://wishlist.example.com/api".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api_base_url, config.api_base_url);
    }
}
