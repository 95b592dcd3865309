use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZuriPayError {
    /// Rejected locally, no request was sent.
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    /// The API answered with a non-success status.
    #[error("{message} (status {status_code}, result: {result})")]
    ProviderError {
        message: String,
        status_code: u16,
        result: String,
    },

    /// No usable response was received. The reqwest error is passed through as-is.
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ZuriPayError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// HTTP status reported by the provider, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ProviderError { status_code, .. } => Some(*status_code),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Provider result code, e.g. `"error"`.
    pub fn result(&self) -> Option<&str> {
        match self {
            Self::ProviderError { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ValidationError { .. } => "Check the request fields and try again",
            Self::ProviderError { status_code, .. } => match status_code {
                401 | 403 => "Check that the API key is valid and has access to this resource",
                404 => "Check the identifier or reference passed to the request",
                429 => "Too many requests, wait before sending more",
                500..=599 => "The ZuriPay API is having trouble, try again later",
                _ => "Inspect the provider message for details",
            },
            Self::HttpError(_) => "Check network connectivity and the configured base URL",
            Self::SerializationError(_) => "The request payload could not be encoded as JSON",
            Self::ConfigError { .. } => "Check the API key, base URL and custom headers",
            Self::IoError(_) => "Check that the configuration file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, ZuriPayError>;
