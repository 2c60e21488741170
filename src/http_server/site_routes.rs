//! Site Routes
//!
//! The browser page at `/` and the `/health` check. The page is a plain
//! client of the student endpoints and holds no logic of its own.

use axum::{http::StatusCode, response::Html, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

const INDEX_HTML: &str = include_str!("index.html");

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create site routes
pub fn site_routes() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
