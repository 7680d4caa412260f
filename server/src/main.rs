//! Static host for the dashboard SPA.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is a fully client-side WASM app; this binary only serves the
//! compiled bundle, the stylesheet, and the authored JSON documents under
//! `/data`. Unknown paths fall back to `index.html` so deep links into
//! client-side routes resolve.

mod config;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();
    let app = routes::app(&config);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, site = %config.site_dir.display(), "dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
