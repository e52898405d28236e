//! Search and details pipelines.
//!
//! A search runs provider call → envelope check → [`check_page`] →
//! [`normalize`] → [`sort_results`]. Details run provider call →
//! [`DetailAggregator::aggregate`].

pub mod details;
pub mod normalize;
pub mod pagination;
pub mod service;
pub mod sort;
pub mod types;

pub use details::DetailAggregator;
pub use normalize::{normalize, parse_year};
pub use pagination::{OutOfRange, PageGate, PageTarget, SearchRoute, check_page};
pub use service::{CatalogService, SearchOutcome, SearchRequest};
pub use sort::{SortKey, SortOrder, sort_results};
pub use types::{
    DetailRecord, KindFacts, MovieFacts, ReleaseYear, SearchResponse,
    SearchResultItem, TvFacts,
};
