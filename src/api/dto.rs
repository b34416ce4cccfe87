//! Data Transfer Objects
//!
//! Response types for the API endpoints.

use serde::{Deserialize, Serialize};

pub use crate::page::{MapSettings, PageSettings};

/// Health status response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Whether a map app key is configured
    pub map_configured: bool,
    /// Size of the seed list
    pub locations: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
