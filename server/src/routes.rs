//! Router assembly.
//!
//! Three surfaces: a health probe, the read-only JSON documents under
//! `/data`, and the static site with an `index.html` fallback for SPA deep
//! links.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Build the full application router from config.
pub fn app(config: &Config) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    let index = config.site_dir.join("index.html");
    let site = ServeDir::new(&config.site_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/data", ServeDir::new(&config.data_dir))
        .fallback_service(site)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
