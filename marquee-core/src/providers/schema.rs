//! Typed view of the TMDB payloads Marquee consumes.
//!
//! Every field is optional or defaulted. TMDB omits, nulls, or empties fields
//! freely depending on the title. Search hits go further: a field with the
//! wrong JSON type decodes to `None`, so one odd hit never sinks the page.
//! Everywhere else a wrong type is a decode failure.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// `null` and absent both decode to `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Wrong JSON type decodes to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(|value| serde_json::from_value(value).ok()))
}

/// One page of `/search/movie` or `/search/tv`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawSearchPage {
    pub total_pages: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<RawSearchItem>,
}

/// A search hit. Movies fill the `*_title` / `release_date` fields, TV shows
/// the `*_name` / `first_air_date` ones.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawSearchItem {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub original_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub original_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub release_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub first_air_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub popularity: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub vote_average: Option<f64>,
}

/// `/movie/{id}` or `/tv/{id}` with `append_to_response=credits`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawDetails {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<RawGenre>,
    pub vote_count: Option<u64>,
    pub vote_average: Option<f64>,

    // movie
    pub runtime: Option<u32>,
    pub release_date: Option<String>,

    // tv
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    pub in_production: Option<bool>,
    #[serde(rename = "type")]
    pub series_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_by: Vec<RawCreator>,

    pub credits: Option<RawCredits>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawGenre {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCreator {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCredits {
    #[serde(deserialize_with = "null_as_default")]
    pub cast: Vec<RawCastMember>,
    #[serde(deserialize_with = "null_as_default")]
    pub crew: Vec<RawCrewMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCastMember {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCrewMember {
    pub name: Option<String>,
    pub job: Option<String>,
}
