//! Configuration management for Sodan CLI
//!
//! Stores API key and server URL in ~/.config/sodan/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "sodan";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set API key
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    /// Set server URL
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim_end_matches('/').to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("sodan-cli-test-{}-{}", name, std::process::id()))
            .join(CONFIG_FILE)
    }

    #[test]
    fn test_missing_file_gives_default() {
        let config = Config::load_from(&temp_path("missing")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("api_key = \"abc\"").unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let mut config = Config::default();
        config.set_api_key("secret".to_string());
        config.set_base_url("https://sodan.example.com/");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_key.as_deref(), Some("secret"));
        assert_eq!(loaded.base_url, "https://sodan.example.com");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_api_key_omitted_when_unset() {
        let content = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!content.contains("api_key"));
    }
}
