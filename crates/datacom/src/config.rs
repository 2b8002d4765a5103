//! Configuration for the Data Commons client

use crate::error::{DataCommonsError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public Data Commons REST API (v2)
pub const DEFAULT_BASE_URL: &str = "https://api.datacommons.org/v2";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "DATCOM_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "DATCOM_API_BASE";

/// Variable names surfaced per place by the standard toolset
pub const STANDARD_VARIABLE_LIMIT: usize = 10;

/// Variable names surfaced per place by the extended toolset
pub const EXTENDED_VARIABLE_LIMIT: usize = 30;

/// Configuration for Data Commons requests
///
/// The API key is bound here once and handed to the client at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataCommonsConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,

    /// Base URL, without trailing endpoint
    pub base_url: String,

    /// Maximum variable names reported per place during discovery;
    /// `None` leaves it to the agent profile
    pub variable_limit: Option<usize>,

    /// Request timeout; `None` keeps the HTTP client's default
    pub request_timeout: Option<Duration>,
}

impl Default for DataCommonsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            variable_limit: None,
            request_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl DataCommonsConfig {
    /// Create a new configuration builder
    pub fn builder() -> DataCommonsConfigBuilder {
        DataCommonsConfigBuilder::default()
    }

    /// Load the API key (and optional base URL) from the environment
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env().build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(DataCommonsError::Config(format!(
                "API key not configured. Set {API_KEY_ENV} environment variable."
            )));
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| DataCommonsError::Config(format!("Invalid base URL '{}': {e}", self.base_url)))?;

        if self.variable_limit == Some(0) {
            return Err(DataCommonsError::Config(
                "variable_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Configured variable limit, or `default` when none was set
    pub fn variable_limit_or(&self, default: usize) -> usize {
        self.variable_limit.unwrap_or(default)
    }
}

/// Builder for DataCommonsConfig
#[derive(Debug, Default)]
pub struct DataCommonsConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    variable_limit: Option<usize>,
    request_timeout: Option<Option<Duration>>,
}

impl DataCommonsConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the per-place variable limit
    pub fn variable_limit(mut self, limit: usize) -> Self {
        self.variable_limit = Some(limit);
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(Some(duration));
        self
    }

    /// Leave the timeout to the HTTP client's default
    pub fn no_timeout(mut self) -> Self {
        self.request_timeout = Some(None);
        self
    }

    /// Fill unset key and base URL from the environment
    pub fn with_env(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = datacom_utils::env_value(API_KEY_ENV);
        }
        if self.base_url.is_none() {
            self.base_url = datacom_utils::env_value(BASE_URL_ENV);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DataCommonsConfig> {
        let defaults = DataCommonsConfig::default();

        let config = DataCommonsConfig {
            api_key: self.api_key.unwrap_or(defaults.api_key),
            base_url: self
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            variable_limit: self.variable_limit.or(defaults.variable_limit),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        };

        config.validate()?;
        Ok(config)
    }
}
