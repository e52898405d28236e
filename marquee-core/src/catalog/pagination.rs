use serde::Serialize;

use super::sort::{SortKey, SortOrder};
use crate::media::MediaKind;

/// Which surface the corrective link should send the user back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchRoute {
    /// `/search/{kind}/{title}/{page}/?sort=..&order=..`
    Page,
    /// `/api/search/{kind}?title=..&page=..&sort=..&order=..`
    Api,
}

/// A search whose pages are being linked to. Links keep the active ordering.
#[derive(Debug, Clone, Copy)]
pub struct PageTarget<'a> {
    pub kind: MediaKind,
    pub title: &'a str,
    pub sort: SortKey,
    pub order: SortOrder,
    pub route: SearchRoute,
}

impl PageTarget<'_> {
    pub fn link(&self, page: u32) -> String {
        let title = urlencoding::encode(self.title);
        match self.route {
            SearchRoute::Page => format!(
                "/search/{}/{}/{}/?sort={}&order={}",
                self.kind, title, page, self.sort, self.order
            ),
            SearchRoute::Api => format!(
                "/api/search/{}?title={}&page={}&sort={}&order={}",
                self.kind, title, page, self.sort, self.order
            ),
        }
    }
}

/// Informational result for a page past the end of the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutOfRange {
    pub message: String,
    pub last_page: u32,
    pub retry_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageGate {
    Continue,
    OutOfRange(OutOfRange),
}

pub fn check_page(
    requested: u32,
    total_pages: u32,
    target: &PageTarget<'_>,
) -> PageGate {
    if requested <= total_pages {
        return PageGate::Continue;
    }

    PageGate::OutOfRange(OutOfRange {
        message: format!(
            "There are no more pages! The last page was {total_pages}!"
        ),
        last_page: total_pages,
        retry_url: target.link(total_pages),
    })
}
