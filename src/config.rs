//! Runtime configuration
//!
//! Read once from environment variables at startup.

use std::time::Duration;

use thiserror::Error;

use crate::nutrition::{HttpFoodSource, NutrientClientConfig};

pub const ENV_NUTRIENT_API_URL: &str = "HEALTHCALC_NUTRIENT_API_URL";
pub const ENV_NUTRIENT_API_KEY: &str = "HEALTHCALC_NUTRIENT_API_KEY";
pub const ENV_LOOKUP_TIMEOUT_SECS: &str = "HEALTHCALC_LOOKUP_TIMEOUT_SECS";

pub const DEFAULT_NUTRIENT_API_URL: &str = "http://localhost:8787/api/nutrients";
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive whole number of seconds, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub nutrient_api_url: String,
    pub nutrient_api_key: Option<String>,
    pub lookup_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nutrient_api_url: DEFAULT_NUTRIENT_API_URL.to_string(),
            nutrient_api_key: None,
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let nutrient_api_url = match get(ENV_NUTRIENT_API_URL) {
            Some(url) if url.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    var: ENV_NUTRIENT_API_URL,
                })
            }
            Some(url) => url.trim().to_string(),
            None => DEFAULT_NUTRIENT_API_URL.to_string(),
        };

        let nutrient_api_key = get(ENV_NUTRIENT_API_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let lookup_timeout = match get(ENV_LOOKUP_TIMEOUT_SECS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: ENV_LOOKUP_TIMEOUT_SECS,
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        };

        Ok(Self {
            nutrient_api_url,
            nutrient_api_key,
            lookup_timeout,
        })
    }

    /// Client settings for the nutrient endpoint
    pub fn nutrient_client(&self) -> NutrientClientConfig {
        NutrientClientConfig {
            base_url: self.nutrient_api_url.clone(),
            api_key: self.nutrient_api_key.clone(),
            timeout: self.lookup_timeout,
        }
    }

    /// HTTP food source for the configured endpoint
    pub fn food_source(&self) -> Result<HttpFoodSource, ConfigError> {
        Ok(HttpFoodSource::new(self.nutrient_client())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.nutrient_api_url, DEFAULT_NUTRIENT_API_URL);
        assert!(config.nutrient_api_key.is_none());
        assert_eq!(config.lookup_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            (ENV_NUTRIENT_API_URL, "https://food.example.com/lookup "),
            (ENV_NUTRIENT_API_KEY, "secret"),
            (ENV_LOOKUP_TIMEOUT_SECS, "3"),
        ])
        .unwrap();
        assert_eq!(config.nutrient_api_url, "https://food.example.com/lookup");
        assert_eq!(config.nutrient_api_key.as_deref(), Some("secret"));
        assert_eq!(config.lookup_timeout, Duration::from_secs(3));

        let client = config.nutrient_client();
        assert_eq!(client.base_url, "https://food.example.com/lookup");
        assert_eq!(client.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let config = load(&[(ENV_NUTRIENT_API_KEY, "  ")]).unwrap();
        assert!(config.nutrient_api_key.is_none());
    }

    #[test]
    fn test_invalid_timeout() {
        assert!(matches!(
            load(&[(ENV_LOOKUP_TIMEOUT_SECS, "soon")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            load(&[(ENV_LOOKUP_TIMEOUT_SECS, "0")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_empty_url() {
        assert!(matches!(
            load(&[(ENV_NUTRIENT_API_URL, "")]),
            Err(ConfigError::Empty { .. })
        ));
    }
}
