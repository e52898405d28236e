use std::{fmt, sync::Arc};

use marquee_config::Config;
use marquee_core::{CatalogService, MetadataProvider, TmdbProvider, TransportError};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Wires the TMDB provider described by `config`.
    pub fn from_config(config: Config) -> Result<Self, TransportError> {
        let provider = TmdbProvider::new(config.tmdb.provider_settings())?;
        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    pub fn with_provider(
        config: Config,
        provider: Arc<dyn MetadataProvider>,
    ) -> Self {
        let catalog = CatalogService::new(provider, config.tmdb.aggregator());
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
