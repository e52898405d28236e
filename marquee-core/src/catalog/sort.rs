use serde::Serialize;
use std::{cmp::Ordering, fmt};

use super::types::SearchResultItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Popularity,
    Rating,
    Year,
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 4] =
        [SortKey::Popularity, SortKey::Rating, SortKey::Year, SortKey::Name];

    /// Unknown or missing values select the default instead of failing.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("popularity") => SortKey::Popularity,
            Some("rating") => SortKey::Rating,
            Some("year") => SortKey::Year,
            Some("name") => SortKey::Name,
            _ => SortKey::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Rating => "rating",
            SortKey::Year => "year",
            SortKey::Name => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("asc") => SortOrder::Asc,
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn compare_by(key: SortKey, a: &SearchResultItem, b: &SearchResultItem) -> Ordering {
    match key {
        SortKey::Popularity => a.popularity.total_cmp(&b.popularity),
        SortKey::Rating => a.rating.total_cmp(&b.rating),
        SortKey::Year => a.year.sort_value().cmp(&b.year.sort_value()),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}

/// Stable in both directions: descending flips the comparator rather than
/// the output, so equal keys keep provider order.
pub fn sort_results(items: &mut [SearchResultItem], key: SortKey, order: SortOrder) {
    match order {
        SortOrder::Asc => items.sort_by(|a, b| compare_by(key, a, b)),
        SortOrder::Desc => items.sort_by(|a, b| compare_by(key, b, a)),
    }
}

#[cfg(test)]
mod tests {
    use super::{SortKey, SortOrder, sort_results};
    use crate::catalog::types::{ReleaseYear, SearchResultItem};

    fn item(
        id: u64,
        name: &str,
        year: ReleaseYear,
        popularity: f64,
        rating: f64,
    ) -> SearchResultItem {
        SearchResultItem {
            name: name.to_string(),
            id,
            year,
            popularity,
            rating,
        }
    }

    fn ids(items: &[SearchResultItem]) -> Vec<u64> {
        items.iter().map(|item| item.id).collect()
    }

    fn sample() -> Vec<SearchResultItem> {
        vec![
            item(1, "Zoo", ReleaseYear::Known(1999), 10.0, 6.5),
            item(2, "ant", ReleaseYear::Unknown, 30.0, 6.5),
            item(3, "Mid", ReleaseYear::Known(2010), 10.0, 8.0),
            item(4, "bee", ReleaseYear::Known(1999), 20.0, 0.0),
        ]
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut items = sample();
        sort_results(&mut items, SortKey::Name, SortOrder::Asc);
        assert_eq!(ids(&items), vec![2, 4, 3, 1]);

        sort_results(&mut items, SortKey::Name, SortOrder::Desc);
        assert_eq!(ids(&items), vec![1, 3, 4, 2]);
    }

    #[test]
    fn unknown_year_sorts_first_ascending_and_last_descending() {
        let mut items = sample();
        sort_results(&mut items, SortKey::Year, SortOrder::Asc);
        assert_eq!(ids(&items), vec![2, 1, 4, 3]);

        let mut items = sample();
        sort_results(&mut items, SortKey::Year, SortOrder::Desc);
        assert_eq!(ids(&items), vec![3, 1, 4, 2]);
    }

    #[test]
    fn ties_keep_provider_order_in_both_directions() {
        let mut items = sample();
        sort_results(&mut items, SortKey::Popularity, SortOrder::Desc);
        assert_eq!(ids(&items), vec![2, 4, 1, 3]);

        let mut items = sample();
        sort_results(&mut items, SortKey::Popularity, SortOrder::Asc);
        assert_eq!(ids(&items), vec![1, 3, 4, 2]);

        let mut items = sample();
        sort_results(&mut items, SortKey::Rating, SortOrder::Desc);
        assert_eq!(ids(&items), vec![3, 1, 2, 4]);
    }

    #[test]
    fn unrecognized_parameters_fall_back_to_defaults() {
        assert_eq!(SortKey::parse_lenient(Some("budget")), SortKey::Popularity);
        assert_eq!(SortKey::parse_lenient(None), SortKey::Popularity);
        assert_eq!(SortKey::parse_lenient(Some("year")), SortKey::Year);
        assert_eq!(SortOrder::parse_lenient(Some("sideways")), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient(None), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient(Some("asc")), SortOrder::Asc);
    }

    #[test]
    fn empty_input_is_fine() {
        let mut items: Vec<SearchResultItem> = Vec::new();
        sort_results(&mut items, SortKey::Name, SortOrder::Asc);
        assert!(items.is_empty());
    }
}
