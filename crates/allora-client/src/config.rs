//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Default base URL for the Allora API.
pub const DEFAULT_BASE_URL: &str = "https://api.allora.network/v2";

/// Allora chain selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChainSlug {
    /// Mainnet
    Mainnet,
    /// Testnet (default for development)
    #[default]
    Testnet,
}

impl ChainSlug {
    /// Get the chain slug as used in API URL paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl std::fmt::Display for ChainSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for the Allora API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Pre-shared API key, sent as the `x-api-key` header.
    pub api_key: String,

    /// Which Allora chain to query.
    pub chain: ChainSlug,

    /// Base URL of the API (overridable for tests).
    pub base_url: String,

    /// Retry policy
    pub retry: RetryConfig,
}

impl ClientConfig {
    /// Create a new configuration with the default base URL.
    pub fn new(api_key: impl Into<String>, chain: ChainSlug) -> Self {
        Self {
            api_key: api_key.into(),
            chain,
            base_url: DEFAULT_BASE_URL.to_string(),
            retry: RetryConfig::default(),
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the retry policy.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(ClientError::config("API key must not be empty"));
        }
        if self.retry.max_attempts == 0 {
            return Err(ClientError::config("max_attempts must be at least 1"));
        }
        Ok(())
    }
}

/// Retry policy configuration.
#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial attempt)
    pub max_attempts: u32,
    /// Base delay between retries; attempt n waits `base_delay * n`
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_slug() {
        assert_eq!(ChainSlug::Mainnet.as_str(), "mainnet");
        assert_eq!(ChainSlug::Testnet.as_str(), "testnet");
        assert_eq!(ChainSlug::default(), ChainSlug::Testnet);
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("key", ChainSlug::Testnet);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.base_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_config_validate_empty_key() {
        let config = ClientConfig::new("  ", ChainSlug::Testnet);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_zero_attempts() {
        let config = ClientConfig::new("key", ChainSlug::Testnet).with_retry(RetryConfig {
            max_attempts: 0,
            base_delay: Duration::from_millis(10),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_overrides() {
        let config = ClientConfig::new("key", ChainSlug::Mainnet)
            .with_base_url("http://localhost:9999/v2")
            .with_retry(RetryConfig {
                max_attempts: 5,
                base_delay: Duration::from_millis(1),
            });
        assert_eq!(config.base_url, "http://localhost:9999/v2");
        assert_eq!(config.retry.max_attempts, 5);
        assert!(config.validate().is_ok());
    }
}
