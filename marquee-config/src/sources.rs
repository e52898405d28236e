use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub tmdb: FileTmdbConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileTmdbConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Human readable duration, e.g. `"15s"` or `"1500ms"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_limit: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

/// Environment-derived configuration values.
///
/// Numeric values are kept as raw strings so the loader can report the
/// offending variable instead of silently falling back to a default.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<String>,
    pub tmdb_api_key: Option<String>,
    pub tmdb_base_url: Option<String>,
    pub tmdb_image_base_url: Option<String>,
    pub tmdb_poster_size: Option<String>,
    pub tmdb_language: Option<String>,
    pub tmdb_timeout: Option<String>,
    pub tmdb_actor_limit: Option<String>,
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the environment view from an arbitrary lookup. Blank values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            config_path: var("MARQUEE_CONFIG").map(PathBuf::from),
            server_host: var("SERVER_HOST"),
            server_port: var("SERVER_PORT"),
            tmdb_api_key: var("TMDB_API_KEY"),
            tmdb_base_url: var("TMDB_BASE_URL"),
            tmdb_image_base_url: var("TMDB_IMAGE_BASE_URL"),
            tmdb_poster_size: var("TMDB_POSTER_SIZE"),
            tmdb_language: var("TMDB_LANGUAGE"),
            tmdb_timeout: var("TMDB_TIMEOUT"),
            tmdb_actor_limit: var("TMDB_ACTOR_LIMIT"),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_csv(&raw)),
        }
    }
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{EnvConfig, FileConfig};
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> EnvConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn csv_origins_are_split_and_trimmed() {
        let env = env(&[(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:5173, ,https://marquee.example ",
        )]);
        assert_eq!(
            env.cors_allowed_origins,
            Some(vec![
                "http://localhost:5173".to_string(),
                "https://marquee.example".to_string()
            ])
        );
    }

    #[test]
    fn blank_values_are_unset() {
        let env = env(&[("TMDB_API_KEY", "   "), ("SERVER_HOST", "127.0.0.1")]);
        assert_eq!(env.tmdb_api_key, None);
        assert_eq!(env.server_host.as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn file_sections_are_optional() {
        let file: FileConfig = toml::from_str("[tmdb]\nlanguage = \"fr-FR\"\n").unwrap();
        assert_eq!(file.tmdb.language.as_deref(), Some("fr-FR"));
        assert_eq!(file.server.port, None);
        assert_eq!(file.cors.allowed_origins, None);
    }
}
