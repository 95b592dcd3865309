use crate::config::ClientOptions;
use crate::utils::error::{Result, ZuriPayError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// API key plus client options, loaded from a TOML file or the environment.
///
/// ```toml
/// api_key = "${ZURIPAY_API_KEY}"
///
/// [client]
/// base_url = "https://api.zuripay.app/v1"
/// timeout_seconds = 30
///
/// [client.headers]
/// X-Request-Source = "billing"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZuriPayConfig {
    pub api_key: String,
    #[serde(default)]
    pub client: ClientOptions,
}

impl ZuriPayConfig {
    pub fn new(api_key: impl Into<String>, client: ClientOptions) -> Self {
        Self {
            api_key: api_key.into(),
            client,
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| ZuriPayError::config(format!("TOML parsing error: {}", e)))
    }

    /// Reads `ZURIPAY_API_KEY`, `ZURIPAY_BASE_URL` and `ZURIPAY_TIMEOUT_SECONDS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("ZURIPAY_API_KEY").ok_or_else(|| {
            ZuriPayError::config("ZURIPAY_API_KEY environment variable is required")
        })?;

        let timeout_seconds = match lookup("ZURIPAY_TIMEOUT_SECONDS") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                ZuriPayError::config(format!("ZURIPAY_TIMEOUT_SECONDS '{}' is not a number: {}", raw, e))
            })?),
            None => None,
        };

        Ok(Self {
            api_key,
            client: ClientOptions {
                base_url: lookup("ZURIPAY_BASE_URL"),
                headers: Default::default(),
                timeout_seconds,
            },
        })
    }

    /// 替換環境變數 (例如 ${ZURIPAY_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ZuriPayError::config(format!("invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ZuriPayConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;
        if self.api_key.contains("${") {
            return Err(ZuriPayError::config(format!(
                "api_key: unresolved environment variable in '{}'",
                self.api_key
            )));
        }
        self.client.validate()
    }
}
