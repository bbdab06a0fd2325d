//! Client configuration: API key, base URL and an optional request timeout.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::ApiError;

/// Production endpoint of the upstream API.
pub const DEFAULT_BASE_URL: &str = "https://api.twitterapi.io";

/// Environment variable read by [`ClientConfig::from_env`].
pub const API_KEY_ENV: &str = "TWITTERAPI_IO_API_KEY";

/// Immutable credentials and connection settings for one client instance.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Configuration with the default base URL and no timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(api_key),
            base_url: None,
        }
    }

    /// Read the API key from `TWITTERAPI_IO_API_KEY`.
    ///
    /// ## Errors
    ///
    /// Returns `Configuration` if the variable is unset or blank.
    pub fn from_env() -> Result<Self, ApiError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ApiError::Configuration(format!("{API_KEY_ENV} is not set")))?;
        Ok(Self::new(api_key))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
    base_url: Option<String>,
}

impl ClientConfigBuilder {
    /// Override the base URL, e.g. to point at a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request timeout handed to the HTTP stack.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// ## Errors
    ///
    /// Returns `Configuration` if the API key is blank or the base URL does
    /// not parse as an absolute URL.
    pub fn build(self) -> Result<ClientConfig, ApiError> {
        let mut config = self.config;
        if config.api_key.trim().is_empty() {
            return Err(ApiError::missing("api key"));
        }
        if let Some(base_url) = self.base_url {
            Url::parse(&base_url)
                .map_err(|e| ApiError::Configuration(format!("invalid base url {base_url:?}: {e}")))?;
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production_url() {
        let config = ClientConfig::new("key");
        assert_eq!(config.base_url(), "https://api.twitterapi.io");
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn builder_strips_trailing_slash() {
        let config = ClientConfig::builder("key")
            .base_url("http://127.0.0.1:3000/")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:3000");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn builder_rejects_relative_base_url() {
        let err = ClientConfig::builder("key").base_url("not a url").build().unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn builder_rejects_blank_key() {
        let err = ClientConfig::builder("  ").build().unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn debug_redacts_api_key() {
        let rendered = format!("{:?}", ClientConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
