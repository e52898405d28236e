use once_cell::sync::Lazy;
use std::{
    fs,
    path::PathBuf,
    time::Duration,
};
use thiserror::Error;

use marquee_core::{
    catalog::details::{DEFAULT_ACTOR_LIMIT, DEFAULT_POSTER_SIZE, TMDB_IMAGE_BASE},
    providers::tmdb::{TMDB_API_BASE, TMDB_DEFAULT_LANGUAGE, TMDB_DEFAULT_TIMEOUT},
};

use super::{
    models::{
        ApiToken, Config, ConfigMetadata, CorsConfig, ServerConfig, TmdbConfig,
    },
    sources::{EnvConfig, FileConfig},
    validation::{self, ConfigGuardRailError, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("marquee.toml"),
        PathBuf::from("config/marquee.toml"),
    ]
});

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Loads `.env`, then reads the process environment and the config file.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Same as [`ConfigLoader::load`] with an already gathered environment.
    pub fn load_with_env(
        &self,
        env_config: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env_config)?;
        compose_config(
            file_config,
            env_config,
            ConfigMetadata {
                config_path,
                env_file_loaded: false,
            },
        )
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env_config.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(path) => path.clone(),
                None => return Ok((None, None)),
            },
        };

        let contents =
            fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

/// Merges the sources (environment over file over defaults) and applies
/// the guard rails.
pub fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    metadata: ConfigMetadata,
) -> Result<ConfigLoad, ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if file_config.is_none() {
        warnings.push_with_hint(
            "No marquee.toml detected; using environment variables and defaults",
            "Pass --config or set MARQUEE_CONFIG to load a TOML file",
        );
    }

    let FileConfig {
        server: file_server,
        tmdb: file_tmdb,
        cors: file_cors,
    } = file_config.unwrap_or_default();

    let port = match env.server_port.as_deref() {
        Some(raw) => parse_value("SERVER_PORT", raw)?,
        None => file_server.port.unwrap_or(DEFAULT_PORT),
    };
    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port,
    };

    let api_token = env
        .tmdb_api_key
        .or(file_tmdb.api_token.filter(|token| !token.trim().is_empty()))
        .map(ApiToken::new)
        .ok_or(ConfigLoadError::MissingApiToken)?;

    let timeout = match env.tmdb_timeout.as_deref() {
        Some(raw) => parse_duration("TMDB_TIMEOUT", raw)?,
        None => match file_tmdb.timeout.as_deref() {
            Some(raw) => parse_duration("tmdb.timeout", raw)?,
            None => TMDB_DEFAULT_TIMEOUT,
        },
    };

    let actor_limit = match env.tmdb_actor_limit.as_deref() {
        Some(raw) => parse_value("TMDB_ACTOR_LIMIT", raw)?,
        None => file_tmdb.actor_limit.unwrap_or(DEFAULT_ACTOR_LIMIT),
    };

    let tmdb = TmdbConfig {
        api_token,
        base_url: env
            .tmdb_base_url
            .or(file_tmdb.base_url)
            .unwrap_or_else(|| TMDB_API_BASE.to_string()),
        image_base_url: env
            .tmdb_image_base_url
            .or(file_tmdb.image_base_url)
            .unwrap_or_else(|| TMDB_IMAGE_BASE.to_string()),
        poster_size: env
            .tmdb_poster_size
            .or(file_tmdb.poster_size)
            .unwrap_or_else(|| DEFAULT_POSTER_SIZE.to_string()),
        language: env
            .tmdb_language
            .or(file_tmdb.language)
            .unwrap_or_else(|| TMDB_DEFAULT_LANGUAGE.to_string()),
        timeout,
        actor_limit,
    };

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file_cors.allowed_origins)
            .unwrap_or_default(),
    };

    let config = Config {
        server,
        tmdb,
        cors,
        metadata,
    };

    warnings.extend(validation::apply_guard_rails(&config)?);

    Ok(ConfigLoad { config, warnings })
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigLoadError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|err: T::Err| ConfigLoadError::InvalidValue {
            key,
            value: raw.to_string(),
            reason: err.to_string(),
        })
}

fn parse_duration(
    key: &'static str,
    raw: &str,
) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(raw.trim()).map_err(|err| {
        ConfigLoadError::InvalidValue {
            key,
            value: raw.to_string(),
            reason: err.to_string(),
        }
    })
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(
        "TMDB_API_KEY is not set; export a TMDB read access token \
         or set tmdb.api_token in marquee.toml"
    )]
    MissingApiToken,
    #[error("invalid value `{value}` for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}
