//! HTTP API Client
//!
//! Fetches the page settings from the host that served the page.

use gloo_net::http::Request;
use heartmap::PageSettings;

/// Page settings endpoint, relative to the page origin
pub const PAGE_SETTINGS_PATH: &str = "/api/v1/page";

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Fetch header text, map settings and seed locations
pub async fn fetch_page_settings() -> Result<PageSettings, String> {
    let response = Request::get(PAGE_SETTINGS_PATH)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.error.message)
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return Err(message);
    }

    response
        .json::<PageSettings>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
