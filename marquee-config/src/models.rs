use std::{fmt, path::PathBuf, time::Duration};

use marquee_core::{DetailAggregator, TmdbSettings};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub tmdb: TmdbConfig,
    pub cors: CorsConfig,
    pub metadata: ConfigMetadata,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Everything needed to talk to TMDB and shape its payloads.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_token: ApiToken,
    pub base_url: String,
    pub image_base_url: String,
    pub poster_size: String,
    pub language: String,
    pub timeout: Duration,
    /// Upper bound on the actors listed on a details page.
    pub actor_limit: usize,
}

impl TmdbConfig {
    pub fn provider_settings(&self) -> TmdbSettings {
        TmdbSettings::new(self.api_token.expose())
            .with_base_url(self.base_url.clone())
            .with_language(self.language.clone())
            .with_timeout(self.timeout)
    }

    pub fn aggregator(&self) -> DetailAggregator {
        DetailAggregator::new(
            self.image_base_url.clone(),
            self.poster_size.clone(),
            self.actor_limit,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// No origins means no CORS layer at all.
    pub fn is_enabled(&self) -> bool {
        !self.allowed_origins.is_empty()
    }

    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

/// TMDB read access token. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}
