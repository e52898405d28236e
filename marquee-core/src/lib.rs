//! # Marquee Core
//!
//! Library side of the Marquee TMDB front end.
//!
//! The crate owns everything that happens between an inbound request and the
//! response body:
//!
//! - **Providers**: the [`MetadataProvider`] seam and its TMDB implementation,
//!   including the raw payload schema and success / error envelope handling
//! - **Catalog**: normalization of search hits, sorting, the pagination gate
//!   and aggregation of detail payloads
//!
//! Rendering and routing live in `marquee-server`.

pub mod catalog;
pub mod error;
pub mod media;
pub mod providers;

pub use catalog::{
    CatalogService, DetailAggregator, DetailRecord, KindFacts, MovieFacts,
    OutOfRange, PageGate, PageTarget, ReleaseYear, SearchOutcome,
    SearchRequest, SearchResponse, SearchResultItem, SearchRoute, SortKey,
    SortOrder, TvFacts,
};
pub use error::{CatalogError, Result, TransportError};
pub use media::MediaKind;
pub use providers::{
    MetadataProvider, ProviderReply, ProviderStatus, TmdbProvider,
    TmdbSettings,
};
