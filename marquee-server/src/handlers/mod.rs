pub mod api;
pub mod health;
pub mod pages;

use marquee_core::{CatalogError, MediaKind};

pub(crate) fn parse_kind(raw: &str) -> Result<MediaKind, CatalogError> {
    raw.parse()
}

/// Pages are 1-based; a missing value means the first page.
pub(crate) fn parse_page(raw: Option<&str>) -> Result<u32, CatalogError> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        None => Ok(1),
        Some(raw) => raw.parse::<u32>().map_err(|_| {
            CatalogError::validation("page", format!("`{raw}` is not a page number"))
        }),
    }
}
