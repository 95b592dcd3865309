#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use toml_config::ZuriPayConfig;

pub const DEFAULT_BASE_URL: &str = "https://api.zuripay.app/v1";

/// Transport settings fixed when the client is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// Overrides [`DEFAULT_BASE_URL`].
    #[serde(default)]
    pub base_url: Option<String>,
    /// Sent with every request. Wins over the built-in `Authorization` header on conflict.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl ClientOptions {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

impl Validate for ClientOptions {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", self.base_url())?;

        for name in self.headers.keys() {
            validate_non_empty_string("headers", name)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            if timeout == 0 {
                return Err(crate::utils::error::ZuriPayError::config(
                    "timeout_seconds: value must be at least 1",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let options = ClientOptions::default();
        assert_eq!(options.base_url(), DEFAULT_BASE_URL);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let options = ClientOptions::default()
            .with_base_url("https://api.custom.com")
            .with_header("X-Custom-Header", "test")
            .with_timeout_seconds(10);

        assert_eq!(options.base_url(), "https://api.custom.com");
        assert_eq!(options.headers.get("X-Custom-Header").map(String::as_str), Some("test"));
        assert_eq!(options.timeout_seconds, Some(10));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(ClientOptions::default().with_base_url("not a url").validate().is_err());
        assert!(ClientOptions::default().with_timeout_seconds(0).validate().is_err());
    }
}
