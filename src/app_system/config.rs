use std::{env, fmt::Display, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::info;

use crate::search_actor::DEFAULT_SEARCH_DELAY;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3001";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Process settings. Every value has a default; the environment may override it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub search_delay: Duration,
    pub server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            search_delay: DEFAULT_SEARCH_DELAY,
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads `SEARCH_PORT`, `SEARCH_DELAY_MS` and `SEARCH_SERVER_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let delay_ms = try_load(&lookup, "SEARCH_DELAY_MS", defaults.search_delay.as_millis() as u64)?;

        Ok(Self {
            port: try_load(&lookup, "SEARCH_PORT", defaults.port)?,
            search_delay: Duration::from_millis(delay_ms),
            server_url: try_load(&lookup, "SEARCH_SERVER_URL", defaults.server_url)?
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 3001);
        assert_eq!(config.search_delay, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SEARCH_PORT", "8080"),
            ("SEARCH_DELAY_MS", "250"),
            ("SEARCH_SERVER_URL", "http://example.test:9000/"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.search_delay, Duration::from_millis(250));
        assert_eq!(config.server_url, "http://example.test:9000");
    }

    #[test]
    fn test_malformed_value_is_rejected() {
        let error = Config::from_lookup(lookup(&[("SEARCH_PORT", "not-a-port")])).unwrap_err();
        assert!(matches!(error, ConfigError::Invalid { key: "SEARCH_PORT", .. }));
    }
}
