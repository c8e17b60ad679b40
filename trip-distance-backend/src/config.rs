//! Server configuration pulled from the environment.

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5001;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DISTANCE_API_KEY is not set.")]
    MissingApiKey,
    #[error("TRIP_DISTANCE_PORT is not a valid port number.")]
    BadPort(std::num::ParseIntError),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    /// The single browser origin the proxy accepts requests from.
    pub allowed_origin: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<ServerConfig, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<ServerConfig, ConfigError> {
        let api_key = get("DISTANCE_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let host = get("TRIP_DISTANCE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("TRIP_DISTANCE_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(ConfigError::BadPort)?,
            None => DEFAULT_PORT,
        };
        let allowed_origin =
            get("TRIP_DISTANCE_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());

        Ok(ServerConfig {
            host,
            port,
            api_key,
            allowed_origin,
        })
    }
}

#[cfg(test)]
mod config_tests {
    use std::collections::HashMap;

    use crate::config::{ConfigError, ServerConfig};

    fn lookup_from(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_apply_when_only_key_is_set() {
        let vars = lookup_from(&[("DISTANCE_API_KEY", "test-key")]);
        let config = ServerConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5001);
        assert_eq!(config.allowed_origin, "http://localhost:3000");
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let result = ServerConfig::from_lookup(|_| None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let vars = lookup_from(&[
            ("DISTANCE_API_KEY", "test-key"),
            ("TRIP_DISTANCE_HOST", "0.0.0.0"),
            ("TRIP_DISTANCE_PORT", "8081"),
            ("TRIP_DISTANCE_ALLOWED_ORIGIN", "http://localhost:8080"),
        ]);
        let config = ServerConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8081);
        assert_eq!(config.allowed_origin, "http://localhost:8080");
    }

    #[test]
    fn test_unparseable_port_is_an_error() {
        let vars = lookup_from(&[
            ("DISTANCE_API_KEY", "test-key"),
            ("TRIP_DISTANCE_PORT", "not-a-port"),
        ]);
        let result = ServerConfig::from_lookup(|key| vars.get(key).cloned());

        assert!(matches!(result, Err(ConfigError::BadPort(_))));
    }
}
