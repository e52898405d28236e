use thiserror::Error;
use url::Url;

use super::models::{Config, CorsConfig};

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("{field} must be an http(s) URL, got `{value}`")]
    InvalidUrl { field: &'static str, value: String },
    #[error("TMDB_TIMEOUT must be greater than zero")]
    ZeroTimeout,
    #[error("TMDB_POSTER_SIZE `{value}` is not a valid image size segment")]
    InvalidPosterSize { value: String },
    #[error("invalid CORS origin `{origin}`")]
    InvalidCorsOrigin { origin: String },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    let base_url = require_http_url("TMDB_BASE_URL", &config.tmdb.base_url)?;
    let image_url =
        require_http_url("TMDB_IMAGE_BASE_URL", &config.tmdb.image_base_url)?;

    if base_url.scheme() == "http" {
        warnings.push_with_hint(
            "TMDB_BASE_URL uses plain http; the API token is sent in clear text",
            "Only point TMDB_BASE_URL at http endpoints you control",
        );
    }
    if image_url.scheme() == "http" {
        warnings.push(
            "TMDB_IMAGE_BASE_URL uses plain http; \
             posters may be blocked as mixed content",
        );
    }

    if config.tmdb.timeout.is_zero() {
        return Err(ConfigGuardRailError::ZeroTimeout);
    }

    let poster_size = config.tmdb.poster_size.as_str();
    if poster_size.is_empty()
        || !poster_size.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(ConfigGuardRailError::InvalidPosterSize {
            value: poster_size.to_string(),
        });
    }

    if config.tmdb.actor_limit == 0 {
        warnings.push_with_hint(
            "TMDB_ACTOR_LIMIT is 0; details pages will list no actors",
            "Unset TMDB_ACTOR_LIMIT to use the default of 10",
        );
    }

    validate_cors(&config.cors)?;
    if config.cors.is_wildcard_included() {
        warnings.push("CORS allows any origin");
    }

    Ok(warnings)
}

fn require_http_url(
    field: &'static str,
    value: &str,
) -> Result<Url, ConfigGuardRailError> {
    let invalid = || ConfigGuardRailError::InvalidUrl {
        field,
        value: value.to_string(),
    };
    let url = Url::parse(value).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(invalid()),
    }
}

fn validate_cors(cors: &CorsConfig) -> Result<(), ConfigGuardRailError> {
    for origin in &cors.allowed_origins {
        if origin == "*" {
            continue;
        }
        let valid = Url::parse(origin).is_ok_and(|url| {
            matches!(url.scheme(), "http" | "https")
                && url.has_host()
                && url.path() == "/"
        }) && !origin.ends_with('/');
        if !valid {
            return Err(ConfigGuardRailError::InvalidCorsOrigin {
                origin: origin.clone(),
            });
        }
    }
    Ok(())
}
