//! Map Synchronizer
//!
//! Keeps the markers drawn on a map widget in one-to-one correspondence with
//! the current [`LocationStore`](crate::location::LocationStore) snapshot and
//! frames the viewport around them.
//!
//! ## Modules
//!
//! - [`geo`]: coordinates and the bounds accumulator
//! - [`marker`]: marker placement and hover styling
//! - [`provider`]: the [`MapProvider`] seam over the external widget library
//! - [`strategy`]: how overlays are reconciled on each redraw
//! - [`sync`]: the [`MapSynchronizer`] state machine
//! - [`recording`]: an in-memory provider for tests and headless use

pub mod error;
pub mod geo;
pub mod marker;
pub mod provider;
pub mod recording;
pub mod strategy;
pub mod sync;

pub use error::{MapError, MapResult};
pub use geo::{LatLng, LatLngBounds};
pub use marker::{Anchor, HoverState, MarkerSpec, MarkerStyle};
pub use provider::{MapOptions, MapProvider};
pub use recording::RecordingProvider;
pub use strategy::{FullRedraw, RedrawStrategy};
pub use sync::{MapState, MapSynchronizer, RedrawReport};
