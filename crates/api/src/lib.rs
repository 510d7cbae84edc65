//! Welcome and health-check HTTP service for container deployments.
//!
//! Serves a greeting with deployment metadata on `/` and a fixed probe
//! payload on `/health`, with per-request tracing spans.

pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::home::index))
        .route("/health", get(routes::health::check))
        .layer(TraceLayer::new_for_http())
}

/// Binds `config.addr()` and serves the app until `shutdown` resolves.
///
/// Bind and accept-loop failures are returned to the caller unlogged.
pub async fn serve<F>(config: &Config, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, version = env!("CARGO_PKG_VERSION"), "starting welcome-api");

    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}
