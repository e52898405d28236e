use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use tracing::warn;

use marquee_core::CatalogError;

use crate::views;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    /// Provider-side code when TMDB rejected the call.
    pub status_code: Option<i64>,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            status_code: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    /// Same error, rendered as an HTML page instead of JSON.
    pub fn into_html(self) -> HtmlError {
        HtmlError(self)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self.status_code {
            Some(code) => json!({ "error": self.message, "status_code": code }),
            None => json!({ "error": self.message }),
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Provider {
                status_code,
                message,
            } => Self {
                status: StatusCode::BAD_REQUEST,
                message,
                status_code: Some(status_code),
            },
            CatalogError::Validation { .. } => Self::bad_request(err.to_string()),
            CatalogError::Transport(transport) => {
                warn!(error = %transport, "metadata provider unavailable");
                Self::bad_gateway(transport.to_string())
            }
        }
    }
}

/// [`AppError`] for the server-rendered routes.
#[derive(Debug)]
pub struct HtmlError(pub AppError);

pub type HtmlResult<T> = Result<T, HtmlError>;

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let HtmlError(err) = self;
        (err.status, Html(views::error_page(err.status, &err.message)))
            .into_response()
    }
}

impl From<CatalogError> for HtmlError {
    fn from(err: CatalogError) -> Self {
        HtmlError(AppError::from(err))
    }
}
