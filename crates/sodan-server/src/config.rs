//! Server configuration
//!
//! Read once at startup from the Shuttle secret store, falling back to the
//! process environment (and `.env`). A missing model credential aborts startup.

use std::time::Duration;

use sodan::{ModelSettings, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use thiserror::Error;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const SODAN_MODEL: &str = "SODAN_MODEL";
pub const SODAN_TEMPERATURE: &str = "SODAN_TEMPERATURE";
pub const SODAN_TIMEOUT_SECS: &str = "SODAN_TIMEOUT_SECS";
pub const SODAN_API_KEY: &str = "SODAN_API_KEY";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required secret: {0}")]
    MissingSecret(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Process-wide settings, immutable after startup
#[derive(Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model_settings: ModelSettings,
    pub request_timeout: Duration,
    /// Bearer token for the JSON API; `None` disables auth
    pub api_key: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_key", &"***")
            .field("openai_base_url", &self.openai_base_url)
            .field("model_settings", &self.model_settings)
            .field("request_timeout", &self.request_timeout)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl AppConfig {
    /// Load from Shuttle secrets, then `.env` / environment variables
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            tracing::debug!("Loaded .env file");
        }
        Self::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let openai_api_key = get(OPENAI_API_KEY).ok_or(ConfigError::MissingSecret(OPENAI_API_KEY))?;

        let openai_base_url = get(OPENAI_BASE_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

        let model = get(SODAN_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let temperature = match get(SODAN_TEMPERATURE) {
            Some(raw) => raw.parse::<f32>().map_err(|e| ConfigError::InvalidValue {
                key: SODAN_TEMPERATURE,
                reason: e.to_string(),
            })?,
            None => DEFAULT_TEMPERATURE,
        };
        let model_settings =
            ModelSettings::new(model, temperature).map_err(|e| ConfigError::InvalidValue {
                key: SODAN_TEMPERATURE,
                reason: e.to_string(),
            })?;

        let timeout_secs = match get(SODAN_TIMEOUT_SECS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        key: SODAN_TIMEOUT_SECS,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(secs) => secs,
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        key: SODAN_TIMEOUT_SECS,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            openai_api_key,
            openai_base_url,
            model_settings,
            request_timeout: Duration::from_secs(timeout_secs),
            api_key: get(SODAN_API_KEY),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_missing_api_key_fails() {
        assert_eq!(
            load(&[]).unwrap_err(),
            ConfigError::MissingSecret(OPENAI_API_KEY)
        );
        assert_eq!(
            load(&[(OPENAI_API_KEY, "   ")]).unwrap_err(),
            ConfigError::MissingSecret(OPENAI_API_KEY)
        );
    }

    #[test]
    fn test_defaults() {
        let config = load(&[(OPENAI_API_KEY, "sk-test")]).unwrap();

        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.openai_base_url, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(config.model_settings, ModelSettings::default());
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            (OPENAI_API_KEY, "sk-test"),
            (OPENAI_BASE_URL, "http://localhost:8080/v1/"),
            (SODAN_MODEL, "gpt-4o"),
            (SODAN_TEMPERATURE, "0.5"),
            (SODAN_TIMEOUT_SECS, "15"),
            (SODAN_API_KEY, "secret"),
        ])
        .unwrap();

        assert_eq!(config.openai_base_url, "http://localhost:8080/v1");
        assert_eq!(config.model_settings.model(), "gpt-4o");
        assert_eq!(config.model_settings.temperature(), 0.5);
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_invalid_temperature() {
        for raw in ["warm", "3.0"] {
            let err = load(&[(OPENAI_API_KEY, "sk-test"), (SODAN_TEMPERATURE, raw)]).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue {
                    key: SODAN_TEMPERATURE,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_invalid_timeout() {
        for raw in ["0", "-1", "soon"] {
            let err = load(&[(OPENAI_API_KEY, "sk-test"), (SODAN_TIMEOUT_SECS, raw)]).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue {
                    key: SODAN_TIMEOUT_SECS,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = load(&[(OPENAI_API_KEY, "sk-test"), (SODAN_API_KEY, "secret")]).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-test"));
        assert!(!debug.contains("secret"));
    }
}
