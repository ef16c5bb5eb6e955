//! API routes for sentimentd.

use crate::analysis::AnalysisError;
use crate::server::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use sentiment_common::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthResponse};
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;
type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

pub fn analyze_routes() -> Router<AppStateArc> {
    Router::new().route("/analyze", post(analyze))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

/// Analyze a batch of feedback strings.
///
/// The payload is extracted as a `Result` so any body that is not valid
/// JSON maps to the contract's 400 message instead of axum's default
/// rejection. A missing `feedbacks` field deserializes to an empty list
/// and is rejected as an empty batch.
async fn analyze(
    State(state): State<AppStateArc>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    info!("Received sentiment analysis request");

    let Json(req) = payload.map_err(|rejection| {
        error!("Request is not JSON: {}", rejection);
        bad_request("Request must be JSON")
    })?;

    // Scoring is CPU-bound; keep it off the async workers. A panicking
    // scorer surfaces here as the join error and the process lives on.
    let analyzer = state.analyzer.clone();
    let outcome = tokio::task::spawn_blocking(move || analyzer.analyze(&req.feedbacks))
        .await
        .map_err(|e| {
            error!("Analysis task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?;

    match outcome {
        Ok(response) => Ok(Json(response)),
        Err(AnalysisError::EmptyBatch) => {
            error!("No feedbacks provided");
            Err(bad_request("No feedbacks provided"))
        }
    }
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
