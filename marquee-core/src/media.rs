use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::CatalogError;

/// Discriminator between the two result shapes TMDB serves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    /// Human label used by the HTML views.
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Movie => "Movie",
            MediaKind::Tv => "TV Series",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "movie" => Ok(MediaKind::Movie),
            "tv" => Ok(MediaKind::Tv),
            other => Err(CatalogError::validation(
                "kind",
                format!("expected `movie` or `tv`, got `{other}`"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MediaKind;

    #[test]
    fn parses_known_kinds_only() {
        assert_eq!("movie".parse::<MediaKind>().unwrap(), MediaKind::Movie);
        assert_eq!("tv".parse::<MediaKind>().unwrap(), MediaKind::Tv);
        assert!("Movie".parse::<MediaKind>().is_err());
        assert!("anime".parse::<MediaKind>().is_err());
    }

    #[test]
    fn invalid_kind_names_the_parameter() {
        let err = "series".parse::<MediaKind>().unwrap_err();
        assert_eq!(err.parameter(), Some("kind"));
    }
}
