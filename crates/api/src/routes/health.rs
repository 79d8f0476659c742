use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether story generation has a configured text model.
    pub story_ready: bool,
    /// Whether illustration generation has both upstream models configured.
    pub illustrations_ready: bool,
}

/// GET /health -- reports which pipeline stages are usable.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let story_ready = state.pipeline.story_ready();
    let illustrations_ready = state.pipeline.illustrations_ready();

    let status = if story_ready && illustrations_ready {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        story_ready,
        illustrations_ready,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
