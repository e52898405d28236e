use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use marquee_core::{
    CatalogError, SearchOutcome, SearchRequest, SearchRoute, SortKey, SortOrder,
};

use super::{parse_kind, parse_page};
use crate::{
    infra::{app_state::AppState, errors::HtmlResult},
    views,
};

/// GET /
pub async fn home() -> Html<String> {
    Html(views::home_page())
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub kind: Option<String>,
    pub title: Option<String>,
}

/// GET /search?kind=&title= - turns the home form into a results URL.
pub async fn search_form(Query(form): Query<SearchForm>) -> HtmlResult<Redirect> {
    let kind = parse_kind(form.kind.as_deref().unwrap_or_default())?;
    let title = form
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .ok_or_else(|| CatalogError::missing("title"))?;

    Ok(Redirect::to(&format!(
        "/search/{}/{}/1/",
        kind,
        urlencoding::encode(title)
    )))
}

#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// GET /search/{kind}/{title}/{page}/
pub async fn search_results(
    State(state): State<AppState>,
    Path((kind, title, page)): Path<(String, String, String)>,
    Query(params): Query<SortParams>,
) -> HtmlResult<Html<String>> {
    let kind = parse_kind(&kind)?;
    let page = parse_page(Some(&page))?;

    let request = SearchRequest {
        kind,
        title,
        page,
        sort: SortKey::parse_lenient(params.sort.as_deref()),
        order: SortOrder::parse_lenient(params.order.as_deref()),
        route: SearchRoute::Page,
    };

    let html = match state.catalog.search(&request).await? {
        SearchOutcome::Page(response) => views::results_page(kind, &response),
        SearchOutcome::OutOfRange(out) => views::out_of_range_page(&out),
    };
    Ok(Html(html))
}

/// GET /watch/{kind}/{id}/ - identifier display only, no upstream call.
pub async fn watch(Path((kind, id)): Path<(String, String)>) -> Response {
    match parse_kind(&kind) {
        Ok(kind) => Html(views::watch_page(kind, &id)).into_response(),
        Err(_) => (StatusCode::BAD_REQUEST, "Invalid type").into_response(),
    }
}
