pub mod schema;
pub mod tmdb;

use async_trait::async_trait;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{error::TransportError, media::MediaKind};
pub use schema::{RawDetails, RawSearchPage, RawSearchItem};
pub use tmdb::{TmdbProvider, TmdbSettings};

/// Error envelope the provider returns in place of a payload, e.g.
/// `{"success": false, "status_code": 7, "status_message": "Invalid API key"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderStatus {
    pub status_code: i64,
    #[serde(default)]
    pub status_message: String,
}

/// What came back from a provider call that made it through transport.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderReply<T> {
    Ok(T),
    Error(ProviderStatus),
}

impl<T: DeserializeOwned> ProviderReply<T> {
    /// Splits a decoded body into payload or provider error.
    ///
    /// A body counts as an error envelope when it is an object carrying a
    /// `status_code` and does not claim `"success": true`.
    pub fn from_value(value: Value) -> Result<Self, TransportError> {
        if let Some(status) = error_envelope(&value) {
            return Ok(ProviderReply::Error(status));
        }
        Ok(ProviderReply::Ok(serde_json::from_value(value)?))
    }
}

impl<T> ProviderReply<T> {
    pub fn into_result(self) -> Result<T, ProviderStatus> {
        match self {
            ProviderReply::Ok(payload) => Ok(payload),
            ProviderReply::Error(status) => Err(status),
        }
    }
}

pub(crate) fn error_envelope(value: &Value) -> Option<ProviderStatus> {
    let object = value.as_object()?;
    let code = object.get("status_code")?.as_i64()?;
    if object.get("success").and_then(Value::as_bool) == Some(true) {
        return None;
    }
    let message = object
        .get("status_message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Some(ProviderStatus {
        status_code: code,
        status_message: message,
    })
}

/// Upstream metadata source. One call per inbound request.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Search titles of `kind` matching `query`, one provider page at a time.
    async fn search(
        &self,
        kind: MediaKind,
        query: &str,
        page: u32,
    ) -> Result<ProviderReply<RawSearchPage>, TransportError>;

    /// Full record for a single title, including credits.
    async fn details(
        &self,
        kind: MediaKind,
        id: u64,
    ) -> Result<ProviderReply<RawDetails>, TransportError>;

    /// Get the provider name
    fn name(&self) -> &'static str;
}
