//! Configuration library for Marquee.
//!
//! Values are layered from a TOML file, the process environment (optionally
//! primed from a `.env` file) and built-in defaults. The binary applies its
//! command line overrides on top of the returned [`Config`].

pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions,
    compose_config,
};
pub use models::{
    ApiToken, Config, ConfigMetadata, CorsConfig, ServerConfig, TmdbConfig,
};
pub use sources::{EnvConfig, FileConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
