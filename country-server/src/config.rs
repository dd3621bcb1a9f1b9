use std::{env, fmt::Display, str::FromStr};

use reqwest::Url;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_UPSTREAM_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from the provider's full-dataset endpoint, which rejects
/// unbounded requests.
pub const DEFAULT_UPSTREAM_FIELDS: &str =
    "name,flags,region,population,languages,currencies,timezones,capital,cca3,maps";

#[derive(Error, Debug)]
#[error("invalid {key} value {value:?}: {reason}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub upstream_url: Url,
    pub upstream_fields: String,
}

impl Config {
    /// Read the configuration from the environment, logging every default taken.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let upstream_url: Url = try_load(&lookup, "UPSTREAM_URL", DEFAULT_UPSTREAM_URL)?;
        if upstream_url.cannot_be_a_base() {
            return Err(ConfigError {
                key: "UPSTREAM_URL",
                value: upstream_url.to_string(),
                reason: "not a base URL".to_string(),
            });
        }

        Ok(Self {
            host: try_load(&lookup, "HOST", "127.0.0.1")?,
            port: try_load(&lookup, "PORT", "3001")?,
            upstream_url,
            upstream_fields: try_load(&lookup, "UPSTREAM_FIELDS", DEFAULT_UPSTREAM_FIELDS)?,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError {
            key,
            reason: e.to_string(),
            value,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3001);
        assert_eq!(config.upstream_url.as_str(), DEFAULT_UPSTREAM_URL);
        assert_eq!(config.upstream_fields, DEFAULT_UPSTREAM_FIELDS);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(|key| match key {
            "PORT" => Some("8080".to_string()),
            "UPSTREAM_URL" => Some("http://127.0.0.1:9000".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_url.as_str(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_lookup(|key| (key == "PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn non_base_upstream_url_is_rejected() {
        let result =
            Config::from_lookup(|key| (key == "UPSTREAM_URL").then(|| "mailto:a@b.c".to_string()));
        assert!(result.is_err());
    }
}
