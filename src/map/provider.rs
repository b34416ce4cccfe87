//! Map Provider
//!
//! The seam between the synchronizer and an external map widget library.
//! The browser build implements it over the Kakao Maps SDK; tests use
//! [`RecordingProvider`](super::RecordingProvider).
//!
//! Widget handles are usually tied to a single JS thread, so the trait is
//! declared `?Send`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::MapResult;
use super::geo::{LatLng, LatLngBounds};
use super::marker::MarkerSpec;

/// Default map center before markers are fitted
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 37.5,
    lng: 127.5,
};

/// Default zoom level (Kakao levels: 1 = closest)
pub const DEFAULT_LEVEL: u8 = 14;

/// Initial view of a freshly created map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    pub center: LatLng,
    pub level: u8,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            level: DEFAULT_LEVEL,
        }
    }
}

/// Narrow contract over a map widget library
#[async_trait(?Send)]
pub trait MapProvider {
    /// Page region the map is drawn into
    type Container;
    /// Handle to a live map surface
    type Map;
    /// Handle to one drawn marker
    type Overlay;

    /// Load the widget library.
    ///
    /// Resolves once the library is usable. Must not be assumed to be fast.
    async fn load(&self) -> MapResult<()>;

    /// Construct a map surface inside `container`
    fn create_map(&self, container: &Self::Container, options: &MapOptions)
        -> MapResult<Self::Map>;

    /// Draw a marker on `map`
    fn create_overlay(&self, map: &Self::Map, marker: &MarkerSpec) -> MapResult<Self::Overlay>;

    /// Take a marker off the map
    fn remove_overlay(&self, overlay: Self::Overlay);

    /// Move the viewport so `bounds` is fully visible
    fn set_bounds(&self, map: &Self::Map, bounds: &LatLngBounds);

    /// Release resources registered by [`load`](Self::load).
    ///
    /// Calling this when nothing is registered is a no-op.
    fn release(&self);
}
