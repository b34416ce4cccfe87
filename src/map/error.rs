//! Map widget error types

use thiserror::Error;

/// Errors raised by a [`MapProvider`](super::MapProvider)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// The widget library script failed to load
    #[error("Map library failed to load: {0}")]
    LibraryLoad(String),

    /// The library loaded but its global namespace is unusable
    #[error("Map library namespace missing: {0}")]
    NamespaceMissing(String),

    /// The map surface could not be constructed
    #[error("Map creation failed: {0}")]
    MapCreation(String),

    /// A marker overlay could not be created
    #[error("Overlay creation failed: {0}")]
    OverlayCreation(String),
}

/// Result type alias for map operations
pub type MapResult<T> = Result<T, MapError>;
