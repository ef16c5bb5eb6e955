//! HTTP server for sentimentd.

use crate::analysis::BatchAnalyzer;
use crate::config::Config;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers.
pub struct AppState {
    pub analyzer: BatchAnalyzer,
}

impl AppState {
    pub fn new(analyzer: BatchAnalyzer) -> Self {
        Self { analyzer }
    }
}

/// Build the router. Split out from [`run`] so tests can drive the
/// service in-process without binding a socket.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::analyze_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        // Browser frontends call this from any origin.
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server until the listener fails.
pub async fn run(state: AppState, config: &Config) -> Result<()> {
    let app = app(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
