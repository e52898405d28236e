use serde::{Serialize, Serializer};
use std::fmt;

use super::sort::{SortKey, SortOrder};
use crate::media::MediaKind;

pub const UNKNOWN: &str = "Unknown";

/// Release year of a search hit, or the `"Unknown"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseYear {
    Known(i32),
    Unknown,
}

impl ReleaseYear {
    /// Numeric value used for ordering; the sentinel ranks below every year.
    pub fn sort_value(self) -> i32 {
        match self {
            ReleaseYear::Known(year) => year,
            ReleaseYear::Unknown => -1,
        }
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseYear::Known(year) => write!(f, "{year}"),
            ReleaseYear::Unknown => f.write_str(UNKNOWN),
        }
    }
}

impl Serialize for ReleaseYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReleaseYear::Known(year) => serializer.serialize_i32(*year),
            ReleaseYear::Unknown => serializer.serialize_str(UNKNOWN),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResultItem {
    pub name: String,
    pub id: u64,
    pub year: ReleaseYear,
    pub popularity: f64,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResultItem>,
    pub page: u32,
    pub title: String,
    pub sort: SortKey,
    pub order: SortOrder,
    pub total_pages: u32,
}

/// Flattened view of a single title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRecord {
    pub id: u64,
    pub kind: MediaKind,
    pub name: String,
    pub overview: String,
    pub poster: Option<String>,
    pub directors: Vec<String>,
    pub actors: Vec<String>,
    pub genres: Vec<String>,
    pub vote_count: Option<u64>,
    pub vote_average: Option<f64>,
    #[serde(flatten)]
    pub facts: KindFacts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KindFacts {
    Movie(MovieFacts),
    Tv(TvFacts),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MovieFacts {
    pub runtime: Option<u32>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TvFacts {
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    pub in_production: Option<bool>,
    pub series_type: Option<String>,
}
