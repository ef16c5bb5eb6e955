//! Sentiment daemon - batch feedback sentiment analysis over HTTP.

use anyhow::Result;
use sentimentd::analysis::BatchAnalyzer;
use sentimentd::config::Config;
use sentimentd::scorer::LexiconScorer;
use sentimentd::server::{self, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("sentimentd v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();

    // One scorer for the process lifetime, shared read-only by every request.
    let scorer = Arc::new(LexiconScorer::new());
    let state = AppState::new(BatchAnalyzer::new(scorer));

    server::run(state, &config).await
}
