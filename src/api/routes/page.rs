//! Page Route
//!
//! - GET /api/v1/page - Header text, map settings and seed locations

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::PageSettings;
use crate::api::state::AppState;

/// GET /api/v1/page
pub async fn get_page(State(state): State<Arc<AppState>>) -> Json<PageSettings> {
    if state.config.map.app_key.is_empty() {
        tracing::warn!("Serving page without a map app key; the map will stay empty");
    }

    Json(PageSettings::new(&state.config, state.seed.to_vec()))
}
