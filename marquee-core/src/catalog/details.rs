use std::collections::HashSet;

use super::types::{DetailRecord, KindFacts, MovieFacts, TvFacts, UNKNOWN};
use crate::{media::MediaKind, providers::RawDetails};

pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_POSTER_SIZE: &str = "w342";
pub const DEFAULT_ACTOR_LIMIT: usize = 10;

/// Insertion-ordered set of names; blanks are dropped.
#[derive(Debug, Default)]
struct NameSet {
    seen: HashSet<String>,
    names: Vec<String>,
}

impl NameSet {
    fn insert(&mut self, name: Option<&str>) {
        let Some(name) = name.map(str::trim).filter(|name| !name.is_empty()) else {
            return;
        };
        if self.seen.insert(name.to_string()) {
            self.names.push(name.to_string());
        }
    }

    fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn into_vec(self) -> Vec<String> {
        self.names
    }
}

/// Turns a details payload into a [`DetailRecord`].
#[derive(Debug, Clone)]
pub struct DetailAggregator {
    image_base: String,
    poster_size: String,
    actor_limit: usize,
}

impl Default for DetailAggregator {
    fn default() -> Self {
        Self::new(TMDB_IMAGE_BASE, DEFAULT_POSTER_SIZE, DEFAULT_ACTOR_LIMIT)
    }
}

impl DetailAggregator {
    pub fn new(
        image_base: impl Into<String>,
        poster_size: impl Into<String>,
        actor_limit: usize,
    ) -> Self {
        Self {
            image_base: image_base.into().trim_end_matches('/').to_string(),
            poster_size: poster_size.into(),
            actor_limit,
        }
    }

    pub fn poster_url(&self, poster_path: Option<&str>) -> Option<String> {
        let path = poster_path.map(str::trim).filter(|path| !path.is_empty())?;
        let separator = if path.starts_with('/') { "" } else { "/" };
        Some(format!(
            "{}/{}{}{}",
            self.image_base, self.poster_size, separator, path
        ))
    }

    pub fn aggregate(&self, kind: MediaKind, raw: RawDetails) -> DetailRecord {
        let credits = raw.credits.unwrap_or_default();

        let mut directors = NameSet::default();
        for member in &credits.crew {
            let is_director = member
                .job
                .as_deref()
                .is_some_and(|job| job.to_lowercase().contains("director"));
            if is_director {
                directors.insert(member.name.as_deref());
            }
        }
        if kind == MediaKind::Tv && directors.is_empty() {
            for creator in &raw.created_by {
                directors.insert(creator.name.as_deref());
            }
        }

        let mut actors = NameSet::default();
        for member in &credits.cast {
            actors.insert(member.name.as_deref());
        }
        let mut actors = actors.into_vec();
        actors.truncate(self.actor_limit);

        let genres = raw
            .genres
            .into_iter()
            .filter_map(|genre| genre.name)
            .filter(|name| !name.trim().is_empty())
            .collect();

        let (name, fallback) = match kind {
            MediaKind::Movie => (raw.title, raw.original_title),
            MediaKind::Tv => (raw.name, raw.original_name),
        };
        let name = name
            .filter(|name| !name.trim().is_empty())
            .or(fallback.filter(|name| !name.trim().is_empty()))
            .unwrap_or_else(|| UNKNOWN.to_string());

        let facts = match kind {
            MediaKind::Movie => KindFacts::Movie(MovieFacts {
                runtime: raw.runtime,
                release_date: non_empty(raw.release_date),
            }),
            MediaKind::Tv => KindFacts::Tv(TvFacts {
                first_air_date: non_empty(raw.first_air_date),
                last_air_date: non_empty(raw.last_air_date),
                number_of_seasons: raw.number_of_seasons,
                number_of_episodes: raw.number_of_episodes,
                in_production: raw.in_production,
                series_type: non_empty(raw.series_type),
            }),
        };

        DetailRecord {
            id: raw.id.unwrap_or_default(),
            kind,
            name,
            overview: raw.overview.unwrap_or_default(),
            poster: self.poster_url(raw.poster_path.as_deref()),
            directors: directors.into_vec(),
            actors,
            genres,
            vote_count: raw.vote_count,
            vote_average: raw.vote_average,
            facts,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
