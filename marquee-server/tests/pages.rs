use std::sync::Arc;

use anyhow::Result;
use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use serde_json::json;

mod support;
use support::{
    Scripted, StubProvider, batman_page, build_server, build_server_with_config,
    invalid_key_envelope, test_config,
};

#[tokio::test]
async fn home_page_offers_the_search_form() -> Result<()> {
    let server = build_server(Arc::new(StubProvider::new()))?;

    let response = server.get("/").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"<form action="/search" method="get">"#));
    assert!(html.contains(r#"name="kind" value="movie""#));
    assert!(html.contains(r#"name="kind" value="tv""#));
    assert!(html.contains(r#"name="title""#));
    Ok(())
}

#[tokio::test]
async fn search_form_redirects_to_first_results_page() -> Result<()> {
    let provider = Arc::new(StubProvider::new());
    let server = build_server(provider.clone())?;

    let response = server
        .get("/search")
        .add_query_param("kind", "tv")
        .add_query_param("title", "  the office ")
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION),
        Some(&HeaderValue::from_static("/search/tv/the%20office/1/"))
    );
    assert!(provider.calls().is_empty());

    server
        .get("/search")
        .add_query_param("kind", "tv")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .get("/search")
        .add_query_param("kind", "book")
        .add_query_param("title", "dune")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn results_page_renders_sorted_rows() -> Result<()> {
    let provider =
        Arc::new(StubProvider::new().with_search(Scripted::Body(batman_page())));
    let server = build_server(provider.clone())?;

    let response = server.get("/search/movie/the%20batman/1/").await;
    response.assert_status_ok();
    let html = response.text();

    let newest = html.find(r#"<a href="/watch/movie/414906/">The Batman</a>"#);
    let oldest = html.find(r#"<a href="/watch/movie/268/">Batman</a>"#);
    assert!(newest.is_some() && oldest.is_some());
    assert!(newest < oldest, "popularity desc puts The Batman first");
    assert!(html.contains("<td>Unknown</td>"));
    assert!(html.contains("Page 1 of 5"));
    assert!(html.contains(
        r#"href="/search/movie/the%20batman/2/?sort=popularity&amp;order=desc""#
    ));
    assert_eq!(provider.calls(), vec!["search movie the batman 1"]);

    // same route without the trailing slash
    server
        .get("/search/movie/the%20batman/1")
        .add_query_param("sort", "name")
        .await
        .assert_status_ok();
    Ok(())
}

#[tokio::test]
async fn page_past_the_end_links_back() -> Result<()> {
    let provider =
        Arc::new(StubProvider::new().with_search(Scripted::Body(batman_page())));
    let server = build_server(provider)?;

    let response = server
        .get("/search/movie/batman/9/")
        .add_query_param("sort", "year")
        .add_query_param("order", "asc")
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("There are no more pages! The last page was 5!"));
    assert!(html.contains(
        r#"Click <a href="/search/movie/batman/5/?sort=year&amp;order=asc">here</a>"#
    ));
    Ok(())
}

#[tokio::test]
async fn provider_errors_render_an_error_page() -> Result<()> {
    let provider =
        Arc::new(StubProvider::new().with_search(Scripted::Body(invalid_key_envelope())));
    let server = build_server(provider)?;

    let response = server.get("/search/movie/batman/1/").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("<p>Invalid API key</p>"));

    let timeout = build_server(Arc::new(StubProvider::new().with_search(Scripted::Timeout)))?;
    timeout
        .get("/search/movie/batman/1/")
        .await
        .assert_status(StatusCode::BAD_GATEWAY);
    Ok(())
}

#[tokio::test]
async fn watch_page_shows_the_identifier() -> Result<()> {
    let provider = Arc::new(StubProvider::new());
    let server = build_server(provider.clone())?;

    let movie = server.get("/watch/movie/155/").await;
    movie.assert_status_ok();
    assert!(movie.text().contains("<code>155</code>"));

    let show = server.get("/watch/tv/1399").await;
    show.assert_status_ok();
    assert!(show.text().contains("TV Series ID: <code>1399</code>"));

    let invalid = server.get("/watch/book/1/").await;
    invalid.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(invalid.text(), "Invalid type");

    assert!(provider.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn health_reports_ok() -> Result<()> {
    let server = build_server(Arc::new(StubProvider::new()))?;

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn configured_origins_receive_cors_headers() -> Result<()> {
    let mut config = test_config()?;
    config.cors.allowed_origins = vec!["http://localhost:5173".into()];
    let server = build_server_with_config(Arc::new(StubProvider::new()), config)?;

    let response = server
        .get("/health")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("http://localhost:5173"),
        )
        .await;
    response.assert_status_ok();
    assert_eq!(
        response
            .headers()
            .get(HeaderName::from_static("access-control-allow-origin")),
        Some(&HeaderValue::from_static("http://localhost:5173"))
    );

    let plain = build_server(Arc::new(StubProvider::new()))?;
    let response = plain
        .get("/health")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("http://localhost:5173"),
        )
        .await;
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
    Ok(())
}
