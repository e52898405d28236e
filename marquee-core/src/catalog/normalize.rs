use chrono::{Datelike, NaiveDate};

use super::types::{ReleaseYear, SearchResultItem, UNKNOWN};
use crate::{media::MediaKind, providers::RawSearchItem};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Maps a raw search hit onto the canonical record. Total: malformed or
/// missing fields fall back to defaults instead of failing.
pub fn normalize(kind: MediaKind, raw: &RawSearchItem) -> SearchResultItem {
    let (name, date) = match kind {
        MediaKind::Movie => (&raw.original_title, &raw.release_date),
        MediaKind::Tv => (&raw.original_name, &raw.first_air_date),
    };

    SearchResultItem {
        name: name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNKNOWN)
            .to_string(),
        id: raw.id.unwrap_or_default(),
        year: parse_year(date.as_deref()),
        popularity: raw.popularity.unwrap_or(0.0),
        rating: raw.vote_average.unwrap_or(0.0),
    }
}

/// Year component of a `YYYY-MM-DD` date.
pub fn parse_year(date: Option<&str>) -> ReleaseYear {
    date.map(str::trim)
        .filter(|date| is_iso_date_shape(date))
        .and_then(|date| NaiveDate::parse_from_str(date, DATE_FORMAT).ok())
        .filter(|date| date.year() > 0)
        .map(|date| ReleaseYear::Known(date.year()))
        .unwrap_or(ReleaseYear::Unknown)
}

// chrono's `%Y` accepts signed and short years; TMDB dates are always
// zero-padded `YYYY-MM-DD`.
fn is_iso_date_shape(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::{normalize, parse_year};
    use crate::{
        catalog::types::ReleaseYear, media::MediaKind, providers::RawSearchItem,
    };

    #[test]
    fn well_formed_dates_yield_their_year() {
        for (date, year) in [
            ("1989-06-23", 1989),
            ("2008-07-16", 2008),
            ("1927-01-10", 1927),
            ("2024-02-29", 2024),
        ] {
            assert_eq!(parse_year(Some(date)), ReleaseYear::Known(year), "{date}");
        }
    }

    #[test]
    fn missing_or_malformed_dates_yield_unknown() {
        for date in [
            None,
            Some(""),
            Some("   "),
            Some("2008"),
            Some("2008-13-01"),
            Some("2023-02-29"),
            Some("16/07/2008"),
            Some("not a date"),
            Some("999-01-01"),
            Some("1-01-01"),
            Some("+2008-07-16"),
            Some("-0001-01-01"),
            Some("0000-01-01"),
            Some("2008-7-16"),
            Some("2008-07-16T00:00:00"),
        ] {
            assert_eq!(parse_year(date), ReleaseYear::Unknown, "{date:?}");
        }
    }

    #[test]
    fn movie_fields_come_from_title_and_release_date() {
        let raw = RawSearchItem {
            id: Some(268),
            original_title: Some("Batman".into()),
            original_name: Some("ignored".into()),
            release_date: Some("1989-06-23".into()),
            first_air_date: Some("1966-01-12".into()),
            popularity: Some(48.2),
            vote_average: Some(7.2),
            ..Default::default()
        };

        let item = normalize(MediaKind::Movie, &raw);
        assert_eq!(item.name, "Batman");
        assert_eq!(item.id, 268);
        assert_eq!(item.year, ReleaseYear::Known(1989));
        assert_eq!(item.popularity, 48.2);
        assert_eq!(item.rating, 7.2);
    }

    #[test]
    fn tv_fields_come_from_name_and_first_air_date() {
        let raw = RawSearchItem {
            id: Some(2287),
            original_name: Some("Batman".into()),
            first_air_date: Some("1966-01-12".into()),
            ..Default::default()
        };

        let item = normalize(MediaKind::Tv, &raw);
        assert_eq!(item.name, "Batman");
        assert_eq!(item.year, ReleaseYear::Known(1966));
    }

    #[test]
    fn absent_fields_fall_back_to_defaults() {
        let raw = RawSearchItem {
            original_title: Some(String::new()),
            ..Default::default()
        };

        let item = normalize(MediaKind::Movie, &raw);
        assert_eq!(item.name, "Unknown");
        assert_eq!(item.id, 0);
        assert_eq!(item.year, ReleaseYear::Unknown);
        assert_eq!(item.popularity, 0.0);
        assert_eq!(item.rating, 0.0);
    }
}
