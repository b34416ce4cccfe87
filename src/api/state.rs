//! Application State
//!
//! Shared state accessible by all API handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::location::Location;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Seed list served to the page, resolved once at startup
    pub seed: Arc<[Location]>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let seed = config.seed().into();
        Self {
            config: Arc::new(config),
            seed,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
