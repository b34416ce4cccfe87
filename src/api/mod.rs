//! Heartmap HTTP host
//!
//! Serves the built page and the settings it loads at startup, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /api/v1/page` - Header text, map settings and seed locations
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! ## Static
//! - Everything else is served from `server.static_dir`, falling back to
//!   `index.html`
//!
//! # Example
//!
//! ```rust,ignore
//! use heartmap::api::{serve, AppState};
//! use heartmap::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default().config;
//!     serve(AppState::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().route("/page", get(routes::page::get_page));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let static_dir = Path::new(&state.config.server.static_dir);
    let static_files =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.server.addr();
    let static_dir = state.config.server.static_dir.clone();

    if !Path::new(&static_dir).join("index.html").exists() {
        tracing::warn!("No index.html in {:?}; build the page with trunk first", static_dir);
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Heartmap listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Heartmap shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::{HealthResponse, PageSettings};
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>heartmap</html>").unwrap();

        let mut config = Config::default();
        config.server.static_dir = dir.path().to_string_lossy().to_string();
        config.map.app_key = "test-key".to_string();

        (build_router(AppState::new(config)), dir)
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(health.status, "healthy");
    }

    #[tokio::test]
    async fn test_page_settings() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/page")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let page: PageSettings = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(page.locations, crate::location::seed_locations());
        assert_eq!(page.map.level, 14);
        assert!(page.map.script_url.contains("appkey=test-key"));
        assert!(page.map.script_url.ends_with("autoload=false"));
    }

    #[tokio::test]
    async fn test_static_index() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"<html>heartmap</html>");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/anything/else")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"<html>heartmap</html>");
    }
}
