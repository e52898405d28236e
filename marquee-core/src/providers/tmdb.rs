use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{fmt, time::Duration};
use tracing::{debug, info, warn};
use url::Url;

use super::{
    MetadataProvider, ProviderReply, error_envelope,
    schema::{RawDetails, RawSearchPage},
};
use crate::{error::TransportError, media::MediaKind};

pub const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";
pub const TMDB_DEFAULT_LANGUAGE: &str = "en-US";
pub const TMDB_DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything the client needs, resolved once at startup.
#[derive(Clone)]
pub struct TmdbSettings {
    pub api_token: String,
    pub base_url: String,
    pub language: String,
    pub timeout: Duration,
}

impl TmdbSettings {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: TMDB_API_BASE.to_string(),
            language: TMDB_DEFAULT_LANGUAGE.to_string(),
            timeout: TMDB_DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for TmdbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbSettings")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// TMDB v3 client authenticating with a v4 read access token.
pub struct TmdbProvider {
    http: reqwest::Client,
    base_url: String,
    language: String,
}

impl fmt::Debug for TmdbProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbProvider")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl TmdbProvider {
    pub fn new(settings: TmdbSettings) -> Result<Self, TransportError> {
        let mut authorization =
            HeaderValue::from_str(&bearer_value(&settings.api_token))
                .map_err(|_| TransportError::InvalidToken)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()
            .map_err(TransportError::Network)?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            language: settings.language,
        })
    }

    pub fn search_url(
        &self,
        kind: MediaKind,
        query: &str,
        page: u32,
    ) -> Result<Url, TransportError> {
        let page = page.to_string();
        let url = Url::parse_with_params(
            &format!("{}/search/{}", self.base_url, kind),
            &[
                ("query", query),
                ("include_adult", "false"),
                ("language", self.language.as_str()),
                ("page", page.as_str()),
            ],
        )?;
        Ok(url)
    }

    pub fn details_url(
        &self,
        kind: MediaKind,
        id: u64,
    ) -> Result<Url, TransportError> {
        let url = Url::parse_with_params(
            &format!("{}/{}/{}", self.base_url, kind, id),
            &[
                ("language", self.language.as_str()),
                ("append_to_response", "credits"),
            ],
        )?;
        Ok(url)
    }

    async fn get_tmdb_json<T>(
        &self,
        url: Url,
    ) -> Result<ProviderReply<T>, TransportError>
    where
        T: DeserializeOwned,
    {
        debug!(url = %url, "TMDB request");

        let response = self.http.get(url).send().await.map_err(|err| {
            warn!(error = %err, "TMDB request failed");
            TransportError::from(err)
        })?;

        let status = response.status();
        let body = response.bytes().await?;

        let value: Value = match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(err) if status.is_success() => return Err(err.into()),
            Err(_) => {
                warn!(status = status.as_u16(), "TMDB returned a non-JSON error");
                return Err(TransportError::Status(status.as_u16()));
            }
        };

        if let Some(provider_status) = error_envelope(&value) {
            warn!(
                http_status = status.as_u16(),
                status_code = provider_status.status_code,
                message = %provider_status.status_message,
                "TMDB returned an error envelope"
            );
            return Ok(ProviderReply::Error(provider_status));
        }

        if !status.is_success() {
            warn!(status = status.as_u16(), "TMDB request was not successful");
            return Err(TransportError::Status(status.as_u16()));
        }

        ProviderReply::from_value(value)
    }
}

/// Accepts tokens configured with or without the `Bearer ` scheme.
fn bearer_value(token: &str) -> String {
    let token = token.trim();
    let bare = token
        .strip_prefix("Bearer ")
        .or_else(|| token.strip_prefix("bearer "))
        .unwrap_or(token);
    format!("Bearer {}", bare.trim())
}

#[async_trait]
impl MetadataProvider for TmdbProvider {
    async fn search(
        &self,
        kind: MediaKind,
        query: &str,
        page: u32,
    ) -> Result<ProviderReply<RawSearchPage>, TransportError> {
        info!(kind = %kind, page, query = %query, "TMDB search");
        let url = self.search_url(kind, query, page)?;
        self.get_tmdb_json(url).await
    }

    async fn details(
        &self,
        kind: MediaKind,
        id: u64,
    ) -> Result<ProviderReply<RawDetails>, TransportError> {
        info!(kind = %kind, id, "TMDB details");
        let url = self.details_url(kind, id)?;
        self.get_tmdb_json(url).await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
