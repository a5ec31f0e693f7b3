//! Configuration module for handling environment variables and .env files

use crate::client::{ClientConfig, RedditClient, RedditClientError, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::http::RetryPolicy;
use dotenv::dotenv;
use log::{info, warn};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration derived from environment variables and .env file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    // Reddit endpoint settings
    pub base_url: String,
    pub user_agent: String,

    // Transport settings
    pub retry: RetryPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn load() -> Self {
        // Try to load .env file, but continue even if it doesn't exist
        match dotenv() {
            Ok(_) => info!("Loaded environment from .env file"),
            Err(_) => info!("No .env file found, using system environment variables only"),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup("REDDIT_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url;
        }

        if let Some(user_agent) = lookup("REDDIT_USER_AGENT").filter(|v| !v.trim().is_empty()) {
            config.user_agent = user_agent;
        }

        if let Some(attempts) = parse_var::<usize, _>(&lookup, "REDDIT_MAX_RETRIES") {
            config.retry.max_attempts = attempts;
        }

        if let Some(delay) = parse_var::<u64, _>(&lookup, "REDDIT_RETRY_DELAY_MS") {
            config.retry.delay = Duration::from_millis(delay);
        }

        if let Some(timeout) = parse_var::<u64, _>(&lookup, "REDDIT_TIMEOUT_SECS") {
            config.retry.timeout = Duration::from_secs(timeout);
        }

        config
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Create a RedditClient from this configuration
    pub fn create_client(&self) -> Result<RedditClient, RedditClientError> {
        RedditClient::from_config(&self.client_config(), self.retry)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}: '{}' is not a valid number", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_variables() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn test_overrides_from_variables() {
        let config = config_from(&[
            ("REDDIT_BASE_URL", "http://localhost:9000"),
            ("REDDIT_USER_AGENT", "my-agent/2.0"),
            ("REDDIT_MAX_RETRIES", "5"),
            ("REDDIT_RETRY_DELAY_MS", "10"),
            ("REDDIT_TIMEOUT_SECS", "2"),
        ]);

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.user_agent, "my-agent/2.0");
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.delay, Duration::from_millis(10));
        assert_eq!(config.retry.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_numbers_are_ignored() {
        let config = config_from(&[("REDDIT_MAX_RETRIES", "lots"), ("REDDIT_TIMEOUT_SECS", "-1")]);
        assert_eq!(config.retry, RetryPolicy::default());
    }

    #[test]
    fn test_blank_strings_keep_defaults() {
        let config = config_from(&[("REDDIT_BASE_URL", "  "), ("REDDIT_USER_AGENT", "")]);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_client_config_carries_endpoint_settings() {
        let config = config_from(&[("REDDIT_BASE_URL", "http://localhost:9000")]);
        let client = config.create_client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000/");
        assert_eq!(client.user_agent(), DEFAULT_USER_AGENT);
    }
}
