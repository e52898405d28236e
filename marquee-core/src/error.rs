use thiserror::Error;

/// Failure to obtain a usable payload from the provider.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request to metadata provider timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("metadata provider returned HTTP {0}")]
    Status(u16),

    #[error("failed to decode provider response: {0}")]
    Decode(String),

    #[error("API token contains characters not allowed in an HTTP header")]
    InvalidToken,

    #[error("invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Network(err)
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The provider answered with its own error envelope.
    #[error("{message}")]
    Provider { status_code: i64, message: String },

    #[error("invalid parameter `{param}`: {message}")]
    Validation {
        param: &'static str,
        message: String,
    },
}

impl CatalogError {
    pub fn validation(param: &'static str, message: impl Into<String>) -> Self {
        CatalogError::Validation {
            param,
            message: message.into(),
        }
    }

    pub fn missing(param: &'static str) -> Self {
        Self::validation(param, "parameter is required")
    }

    /// Name of the offending request parameter for validation failures.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            CatalogError::Validation { param, .. } => Some(param),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
