use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use marquee_core::{
    CatalogError, SearchOutcome, SearchRequest, SearchRoute, SortKey, SortOrder,
};

use super::{parse_kind, parse_page};
use crate::infra::{app_state::AppState, errors::AppResult};

#[derive(Debug, Deserialize)]
pub struct ApiSearchParams {
    pub title: Option<String>,
    pub page: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// GET /api/search/{kind}?title=&page=&sort=&order=
///
/// Answers with a `SearchResponse`, or with an `OutOfRange` body (still 200)
/// when `page` is past the last page.
pub async fn search(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<ApiSearchParams>,
) -> AppResult<Response> {
    let kind = parse_kind(&kind)?;
    let page = parse_page(params.page.as_deref())?;
    let sort = SortKey::parse_lenient(params.sort.as_deref());
    let order = SortOrder::parse_lenient(params.order.as_deref());

    let request = SearchRequest {
        kind,
        title: params.title.unwrap_or_default(),
        page,
        sort,
        order,
        route: SearchRoute::Api,
    };

    let response = match state.catalog.search(&request).await? {
        SearchOutcome::Page(page) => Json(page).into_response(),
        SearchOutcome::OutOfRange(out) => Json(out).into_response(),
    };
    Ok(response)
}

/// GET /api/details/{kind}/{id}
pub async fn details(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> AppResult<Response> {
    let kind = parse_kind(&kind)?;
    let id: u64 = id.trim().parse().map_err(|_| {
        CatalogError::validation("id", format!("`{id}` is not a numeric id"))
    })?;

    let record = state.catalog.details(kind, id).await?;
    Ok(Json(record).into_response())
}
