use crate::error::ConfigError;
use reqwest::Url;
use std::env;
use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_AUTO_DELETE_SECS: u64 = 3;
pub const DEFAULT_TOAST_MS: u64 = 4000;

/// Runtime settings for the report client
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub server_url: Url,
    pub auto_delete_delay: Duration,
    pub toast_duration: Duration,
    pub log_level: tracing::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: Url::parse(DEFAULT_SERVER_URL).expect("default server URL is valid"),
            auto_delete_delay: Duration::from_secs(DEFAULT_AUTO_DELETE_SECS),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_MS),
            log_level: tracing::Level::INFO,
        }
    }
}

impl ClientConfig {
    /// Read settings from `REPORTDESK_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let server_url = match lookup("REPORTDESK_SERVER_URL") {
            Some(raw) => parse_server_url(&raw)?,
            None => defaults.server_url,
        };

        let auto_delete_delay = match lookup("REPORTDESK_AUTO_DELETE_SECS") {
            Some(raw) => Duration::from_secs(parse_number("REPORTDESK_AUTO_DELETE_SECS", &raw)?),
            None => defaults.auto_delete_delay,
        };

        let toast_duration = match lookup("REPORTDESK_TOAST_MS") {
            Some(raw) => Duration::from_millis(parse_number("REPORTDESK_TOAST_MS", &raw)?),
            None => defaults.toast_duration,
        };

        let log_level = match lookup("REPORTDESK_LOG") {
            Some(raw) => raw
                .trim()
                .parse::<tracing::Level>()
                .map_err(|_| ConfigError::InvalidLogLevel(raw.clone()))?,
            None => defaults.log_level,
        };

        Ok(Self {
            server_url,
            auto_delete_delay,
            toast_duration,
            log_level,
        })
    }
}

fn parse_server_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            value: raw.to_string(),
            reason: "not a base URL".to_string(),
        });
    }
    Ok(url)
}

fn parse_number(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.auto_delete_delay, Duration::from_secs(3));
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("REPORTDESK_SERVER_URL", "https://reports.example.org/app/"),
            ("REPORTDESK_AUTO_DELETE_SECS", "10"),
            ("REPORTDESK_TOAST_MS", "2500"),
            ("REPORTDESK_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.server_url.as_str(), "https://reports.example.org/app/");
        assert_eq!(config.auto_delete_delay, Duration::from_secs(10));
        assert_eq!(config.toast_duration, Duration::from_millis(2500));
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad_url = ClientConfig::from_lookup(lookup_from(&[("REPORTDESK_SERVER_URL", "mailto:x@y")]));
        assert!(matches!(bad_url, Err(ConfigError::InvalidUrl { .. })));

        let bad_delay =
            ClientConfig::from_lookup(lookup_from(&[("REPORTDESK_AUTO_DELETE_SECS", "soon")]));
        assert!(matches!(bad_delay, Err(ConfigError::InvalidNumber { .. })));

        let bad_level = ClientConfig::from_lookup(lookup_from(&[("REPORTDESK_LOG", "loud")]));
        assert!(matches!(bad_level, Err(ConfigError::InvalidLogLevel(_))));
    }
}
