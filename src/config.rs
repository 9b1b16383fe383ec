//! Base URL resolution for the Backpack API.
//!
//! The base URL is resolved once at startup and injected into
//! [`ApiClient`](crate::api::client::ApiClient). Two sources mirror the two
//! places the service is reached from: a deployment-provided URL (server side)
//! or the origin of the page serving the web app, which exposes the API under
//! `/api`.

use thiserror::Error;

/// Environment variables checked by [`ClientConfig::from_env`], in order.
pub const API_URL_VARS: [&str; 2] = ["BACKPACK_API_URL", "API_URL"];

/// Path segment the web app serves the API under.
const API_PATH: &str = "/api";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("no API URL configured (set BACKPACK_API_URL or API_URL)")]
    MissingBaseUrl,
    #[error("invalid API URL `{0}`: expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Use an explicit API URL, e.g. `https://backpack.example.com/api`.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());

        if !has_host {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Derive the API URL from a web page origin (`https://host` -> `https://host/api`).
    pub fn from_origin(origin: &str) -> Result<Self, ConfigError> {
        let origin = origin.trim().trim_end_matches('/');
        Self::new(&format!("{}{}", origin, API_PATH))
    }

    /// Read the API URL from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary key lookup; first non-empty variable wins.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = API_URL_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        Self::new(&url)
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_explicit_url_trims_trailing_slash() {
        let config = ClientConfig::new("https://x/").unwrap();
        assert_eq!(config.base_url(), "https://x");
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert_eq!(
            ClientConfig::new("ftp://x"),
            Err(ConfigError::InvalidBaseUrl("ftp://x".into()))
        );
        assert!(ClientConfig::new("https://").is_err());
        assert!(ClientConfig::new("").is_err());
    }

    #[test]
    fn test_origin_appends_api_segment() {
        let config = ClientConfig::from_origin("https://y").unwrap();
        assert_eq!(config.base_url(), "https://y/api");

        let config = ClientConfig::from_origin("https://y/").unwrap();
        assert_eq!(config.base_url(), "https://y/api");
    }

    #[test]
    fn test_lookup_prefers_backpack_var() {
        let env: HashMap<&str, &str> = [
            ("BACKPACK_API_URL", "https://primary"),
            ("API_URL", "https://fallback"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.base_url(), "https://primary");
    }

    #[test]
    fn test_lookup_falls_back_and_skips_empty() {
        let env: HashMap<&str, &str> = [("BACKPACK_API_URL", ""), ("API_URL", "http://x:8080/api")]
            .into_iter()
            .collect();

        let config = ClientConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.base_url(), "http://x:8080/api");
    }

    #[test]
    fn test_lookup_missing() {
        assert_eq!(
            ClientConfig::from_lookup(|_| None),
            Err(ConfigError::MissingBaseUrl)
        );
    }
}
