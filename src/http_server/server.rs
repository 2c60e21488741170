//! # HTTP Server
//!
//! Combines the student and site routers over one shared `StudentStore`.

use std::io;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::HttpServerConfig;
use super::errors::ApiError;
use super::site_routes::site_routes;
use super::student_routes::student_routes;
use crate::student::StudentStore;

/// HTTP server for the student record API
pub struct HttpServer {
    config: HttpServerConfig,
    store: Arc<StudentStore>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server, seeding the store as configured
    pub fn with_config(config: HttpServerConfig) -> Self {
        let store = if config.seed_demo_records {
            StudentStore::with_demo_records()
        } else {
            StudentStore::new()
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Create a new HTTP server over an existing store
    pub fn with_store(config: HttpServerConfig, store: Arc<StudentStore>) -> Self {
        let router = Self::build_router(&config, store.clone());
        Self {
            config,
            store,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<StudentStore>) -> Router {
        Router::new()
            .merge(site_routes())
            .merge(student_routes(store))
            .fallback(|| async { ApiError::NoRoute })
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(cors_layer(config)),
            )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the shared store
    pub fn store(&self) -> Arc<StudentStore> {
        self.store.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address (hostnames are resolved) and serve
    pub async fn start(self) -> io::Result<()> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        info!(
            addr = %listener.local_addr()?,
            students = self.store.len(),
            "student API listening"
        );

        axum::serve(listener, self.router).await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    // No configured origins means permissive, for local development
    if config.cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
