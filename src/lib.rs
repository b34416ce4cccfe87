//! # Heartmap
//!
//! A personal page that pins shared memories on a map as heart markers.
//!
//! ## Modules
//!
//! - [`location`]: the ordered, append-only location store
//! - [`map`]: the map synchronizer and the provider seam over a map widget
//! - [`config`]: TOML configuration with environment overrides
//! - [`page`]: settings the browser page loads at startup
//! - [`api`]: HTTP host for the page (`server` feature)
//!
//! The core modules have no native-only dependencies and compile for
//! `wasm32-unknown-unknown` with `default-features = false`.
//!
//! ## Quick Start
//!
//! ```rust
//! use heartmap::location::{LocationDraft, LocationStore};
//! use heartmap::map::{MapOptions, MapSynchronizer, RecordingProvider};
//!
//! # block_on(async {
//! let store = LocationStore::initialize();
//! let store = store.append(&LocationDraft::new("Busan", "35.1", "129.0"));
//!
//! let provider = RecordingProvider::new();
//! let mut sync = MapSynchronizer::new(provider.clone());
//! sync.initialize(&"map".to_string(), &MapOptions::default()).await.unwrap();
//!
//! let report = sync.sync(store.as_slice()).unwrap();
//! assert_eq!(report.markers, store.len());
//! # });
//! # fn block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod config;
pub mod location;
pub mod map;
pub mod page;

#[cfg(feature = "server")]
pub mod api;

pub use config::{
    generate_default_config, Config, ConfigError, LoadedConfig, LoggingConfig, MapConfig,
};

pub use location::{DraftError, Location, LocationDraft, LocationStore};

pub use map::{
    LatLng, LatLngBounds, MapError, MapOptions, MapProvider, MapState, MapSynchronizer,
    MarkerSpec, MarkerStyle,
};

pub use page::{MapSettings, PageSettings};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};
