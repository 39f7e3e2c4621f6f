//! Liveness endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// What the liveness probe reports.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service name, for multi-service dashboards.
    pub service: &'static str,
    /// Liveness status; always "ok" when the process answers at all.
    pub status: &'static str,
    /// Deployed crate version.
    pub version: &'static str,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: env!("CARGO_PKG_NAME"),
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Router for the liveness endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
