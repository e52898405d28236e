//! # Marquee Server
//!
//! Axum front end over [`marquee_core::CatalogService`]: server-rendered
//! search and watch pages plus a JSON API used by browser clients.

pub mod handlers;
pub mod infra;
pub mod routes;
pub mod views;

pub use infra::app_state::AppState;
pub use routes::create_router;
