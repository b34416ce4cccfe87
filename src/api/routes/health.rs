//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Degraded when no map app key is configured: the page still renders but
/// its map stays empty.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let map_configured = !state.config.map.app_key.is_empty();

    Json(HealthResponse {
        status: if map_configured { "healthy" } else { "degraded" }.to_string(),
        map_configured,
        locations: state.seed.len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
