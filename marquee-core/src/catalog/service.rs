use std::{fmt, sync::Arc};

use tracing::{debug, info};

use super::{
    details::DetailAggregator,
    normalize::normalize,
    pagination::{OutOfRange, PageGate, PageTarget, SearchRoute, check_page},
    sort::{SortKey, SortOrder, sort_results},
    types::{DetailRecord, SearchResponse},
};
use crate::{
    error::{CatalogError, Result},
    media::MediaKind,
    providers::{MetadataProvider, ProviderReply, ProviderStatus},
};

/// A search as the routing layer hands it over.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub kind: MediaKind,
    pub title: String,
    pub page: u32,
    pub sort: SortKey,
    pub order: SortOrder,
    pub route: SearchRoute,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Page(SearchResponse),
    OutOfRange(OutOfRange),
}

/// Search and details pipelines over a single provider.
#[derive(Clone)]
pub struct CatalogService {
    provider: Arc<dyn MetadataProvider>,
    aggregator: DetailAggregator,
}

impl fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService")
            .field("provider", &self.provider.name())
            .field("aggregator", &self.aggregator)
            .finish()
    }
}

impl CatalogService {
    pub fn new(
        provider: Arc<dyn MetadataProvider>,
        aggregator: DetailAggregator,
    ) -> Self {
        Self {
            provider,
            aggregator,
        }
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(CatalogError::missing("title"));
        }
        if request.page == 0 {
            return Err(CatalogError::validation("page", "pages start at 1"));
        }

        let payload = provider_result(
            self.provider.search(request.kind, title, request.page).await?,
        )?;

        let total_pages = payload.total_pages.unwrap_or(1).max(1);
        let target = PageTarget {
            kind: request.kind,
            title,
            sort: request.sort,
            order: request.order,
            route: request.route,
        };
        if let PageGate::OutOfRange(out) =
            check_page(request.page, total_pages, &target)
        {
            info!(
                kind = %request.kind,
                page = request.page,
                total_pages,
                "requested page is past the last page"
            );
            return Ok(SearchOutcome::OutOfRange(out));
        }

        let mut results: Vec<_> = payload
            .results
            .iter()
            .map(|raw| normalize(request.kind, raw))
            .collect();
        sort_results(&mut results, request.sort, request.order);

        debug!(
            kind = %request.kind,
            page = request.page,
            count = results.len(),
            sort = %request.sort,
            order = %request.order,
            "search results ready"
        );

        Ok(SearchOutcome::Page(SearchResponse {
            results,
            page: request.page,
            title: title.to_string(),
            sort: request.sort,
            order: request.order,
            total_pages,
        }))
    }

    pub async fn details(&self, kind: MediaKind, id: u64) -> Result<DetailRecord> {
        let payload = provider_result(self.provider.details(kind, id).await?)?;
        Ok(self.aggregator.aggregate(kind, payload))
    }
}

fn provider_result<T>(reply: ProviderReply<T>) -> Result<T> {
    reply.into_result().map_err(
        |ProviderStatus {
             status_code,
             status_message,
         }| CatalogError::Provider {
            status_code,
            message: status_message,
        },
    )
}
