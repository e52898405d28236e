use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use marquee_config::CorsConfig;

use crate::{
    AppState,
    handlers::{api, health, pages},
};

/// Create the full application router: HTML pages, JSON API and health.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config().cors);

    let router = Router::new()
        .route("/", get(pages::home))
        .route("/search", get(pages::search_form))
        .route("/search/{kind}/{title}/{page}", get(pages::search_results))
        .route("/search/{kind}/{title}/{page}/", get(pages::search_results))
        .route("/watch/{kind}/{id}", get(pages::watch))
        .route("/watch/{kind}/{id}/", get(pages::watch))
        .merge(create_api_router())
        .route("/health", get(health::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    match cors {
        Some(layer) => router.layer(layer),
        None => router,
    }
}

fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/api/search/{kind}", get(api::search))
        .route("/api/details/{kind}/{id}", get(api::details))
}

fn cors_layer(cors: &CorsConfig) -> Option<CorsLayer> {
    if !cors.is_enabled() {
        return None;
    }

    let allow_origin = if cors.is_wildcard_included() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "skipping unusable CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET])
            .allow_headers(Any),
    )
}
