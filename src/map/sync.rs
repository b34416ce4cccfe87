//! Map Synchronizer state machine
//!
//! ```text
//! Uninitialized --initialize ok--> Ready(map) --sync--> Ready(map)
//!       |
//!       +--initialize err--> Failed(error)   (never retried)
//! ```
//!
//! `teardown` removes every overlay, releases the provider and returns to
//! `Uninitialized`. It may be called any number of times.

use super::error::{MapError, MapResult};
use super::geo::LatLngBounds;
use super::provider::{MapOptions, MapProvider};
use super::strategy::{FullRedraw, RedrawStrategy};
use crate::location::Location;

/// Lifecycle of the map surface
#[derive(Debug)]
pub enum MapState<M> {
    Uninitialized,
    Ready(M),
    Failed(MapError),
}

impl<M> MapState<M> {
    pub fn name(&self) -> &'static str {
        match self {
            MapState::Uninitialized => "uninitialized",
            MapState::Ready(_) => "ready",
            MapState::Failed(_) => "failed",
        }
    }
}

/// Summary of one redraw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RedrawReport {
    /// Markers on the map after the redraw
    pub markers: usize,
    /// Markers removed before rebuilding
    pub removed: usize,
    /// Locations whose marker could not be created
    pub failed: usize,
    /// Region the viewport was fitted to, empty when nothing was fitted
    pub bounds: LatLngBounds,
}

/// Keeps widget markers consistent with a location sequence
pub struct MapSynchronizer<P: MapProvider, S = FullRedraw> {
    provider: P,
    strategy: S,
    state: MapState<P::Map>,
    overlays: Vec<P::Overlay>,
}

impl<P: MapProvider> MapSynchronizer<P, FullRedraw> {
    /// Synchronizer using full teardown-and-rebuild redraws
    pub fn new(provider: P) -> Self {
        Self::with_strategy(provider, FullRedraw)
    }
}

impl<P, S> MapSynchronizer<P, S>
where
    P: MapProvider,
    S: RedrawStrategy<P>,
{
    pub fn with_strategy(provider: P, strategy: S) -> Self {
        Self {
            provider,
            strategy,
            state: MapState::Uninitialized,
            overlays: Vec::new(),
        }
    }

    /// Load the widget library and create the map surface.
    ///
    /// On failure the error is logged, the synchronizer moves to
    /// [`MapState::Failed`] and stays there; later calls return the same
    /// error without touching the provider. Calling this when already ready
    /// is a no-op.
    pub async fn initialize(
        &mut self,
        container: &P::Container,
        options: &MapOptions,
    ) -> MapResult<()> {
        match &self.state {
            MapState::Ready(_) => return Ok(()),
            MapState::Failed(e) => return Err(e.clone()),
            MapState::Uninitialized => {}
        }

        let created = match self.provider.load().await {
            Ok(()) => self.provider.create_map(container, options),
            Err(e) => Err(e),
        };

        match created {
            Ok(map) => {
                tracing::info!(
                    lat = options.center.lat,
                    lng = options.center.lng,
                    level = options.level,
                    "Map initialized"
                );
                self.state = MapState::Ready(map);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Map initialization failed");
                self.state = MapState::Failed(e.clone());
                Err(e)
            }
        }
    }

    /// Redraw markers for `locations` and fit the viewport to them.
    ///
    /// Returns `None` without side effects unless the map is ready.
    pub fn sync(&mut self, locations: &[Location]) -> Option<RedrawReport> {
        let map = match &self.state {
            MapState::Ready(map) => map,
            other => {
                tracing::trace!(state = other.name(), "Skipping redraw, map not ready");
                return None;
            }
        };

        let counts = self
            .strategy
            .redraw(&self.provider, map, &mut self.overlays, locations);

        let bounds = LatLngBounds::from_locations(locations);
        if !bounds.is_empty() {
            self.provider.set_bounds(map, &bounds);
        }

        tracing::debug!(
            markers = self.overlays.len(),
            removed = counts.removed,
            failed = counts.failed,
            "Markers redrawn"
        );

        Some(RedrawReport {
            markers: self.overlays.len(),
            removed: counts.removed,
            failed: counts.failed,
            bounds,
        })
    }

    /// Remove all markers and release provider resources
    pub fn teardown(&mut self) {
        for overlay in self.overlays.drain(..) {
            self.provider.remove_overlay(overlay);
        }
        self.provider.release();

        if let MapState::Ready(_) = self.state {
            tracing::debug!("Map torn down");
            self.state = MapState::Uninitialized;
        }
    }

    pub fn state(&self) -> &MapState<P::Map> {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, MapState::Ready(_))
    }

    /// Markers currently drawn
    pub fn marker_count(&self) -> usize {
        self.overlays.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{LocationDraft, LocationStore};
    use crate::map::recording::RecordingProvider;
    use crate::map::LatLng;

    async fn ready_synchronizer() -> (MapSynchronizer<RecordingProvider>, RecordingProvider) {
        let provider = RecordingProvider::new();
        let mut sync = MapSynchronizer::new(provider.clone());
        sync.initialize(&"map".to_string(), &MapOptions::default())
            .await
            .unwrap();
        (sync, provider)
    }

    #[tokio::test]
    async fn test_initialize_ready() {
        let (sync, provider) = ready_synchronizer().await;

        assert!(sync.is_ready());
        assert_eq!(provider.maps_created(), 1);
        assert!(provider.script_present());
    }

    #[tokio::test]
    async fn test_sync_before_ready_is_noop() {
        let provider = RecordingProvider::new();
        let mut sync = MapSynchronizer::new(provider.clone());

        let store = LocationStore::initialize();
        assert!(sync.sync(store.as_slice()).is_none());
        assert_eq!(provider.live_overlays(), 0);
        assert!(provider.last_bounds().is_none());
    }

    #[tokio::test]
    async fn test_redraw_completeness() {
        let (mut sync, provider) = ready_synchronizer().await;
        let store = LocationStore::initialize();

        let report = sync.sync(store.as_slice()).unwrap();
        assert_eq!(report.markers, store.len());
        assert_eq!(provider.live_overlays(), store.len());

        // Second redraw replaces, never accumulates
        let store = store.append(&LocationDraft::new("Busan", "35.1", "129.0"));
        let report = sync.sync(store.as_slice()).unwrap();

        assert_eq!(report.removed, store.len() - 1);
        assert_eq!(report.markers, store.len());
        assert_eq!(provider.live_overlays(), store.len());
        assert_eq!(sync.marker_count(), store.len());
    }

    #[tokio::test]
    async fn test_markers_follow_sequence_order() {
        let (mut sync, provider) = ready_synchronizer().await;
        let store = LocationStore::initialize();

        sync.sync(store.as_slice());

        let titles: Vec<String> = provider.live_markers().into_iter().map(|m| m.title).collect();
        let expected: Vec<String> = store.iter().map(|l| l.title.clone()).collect();
        assert_eq!(titles, expected);
    }

    #[tokio::test]
    async fn test_bounds_coverage() {
        let (mut sync, provider) = ready_synchronizer().await;
        let store = LocationStore::initialize()
            .append(&LocationDraft::new("Busan", "35.1", "129.0"));

        let report = sync.sync(store.as_slice()).unwrap();
        let fitted = provider.last_bounds().unwrap();

        assert_eq!(fitted, report.bounds);
        for location in &store {
            assert!(fitted.contains(LatLng::from(location)), "{}", location.title);
        }
    }

    #[tokio::test]
    async fn test_empty_sequence_clears_without_fitting() {
        let (mut sync, provider) = ready_synchronizer().await;

        sync.sync(LocationStore::initialize().as_slice());
        let before = provider.last_bounds();

        let report = sync.sync(&[]).unwrap();
        assert_eq!(report.markers, 0);
        assert!(report.bounds.is_empty());
        assert_eq!(provider.live_overlays(), 0);
        assert_eq!(provider.last_bounds(), before);
    }

    #[tokio::test]
    async fn test_failed_overlay_is_skipped() {
        let (mut sync, provider) = ready_synchronizer().await;
        provider.fail_overlay_for("대부도");

        let store = LocationStore::initialize();
        let report = sync.sync(store.as_slice()).unwrap();

        assert_eq!(report.failed, 1);
        assert_eq!(report.markers, store.len() - 1);
        assert_eq!(provider.live_overlays(), store.len() - 1);
    }

    #[tokio::test]
    async fn test_load_failure_is_terminal() {
        let provider = RecordingProvider::new();
        provider.fail_load(MapError::LibraryLoad("offline".to_string()));
        let mut sync = MapSynchronizer::new(provider.clone());

        let err = sync
            .initialize(&"map".to_string(), &MapOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err, MapError::LibraryLoad("offline".to_string()));
        assert!(matches!(sync.state(), MapState::Failed(_)));

        // Not retried
        let again = sync.initialize(&"map".to_string(), &MapOptions::default()).await;
        assert!(again.is_err());
        assert_eq!(provider.load_attempts(), 1);

        // Map surface stays empty
        assert!(sync.sync(LocationStore::initialize().as_slice()).is_none());
        assert_eq!(provider.live_overlays(), 0);
        assert_eq!(provider.maps_created(), 0);
    }

    #[tokio::test]
    async fn test_teardown_idempotent() {
        let (mut sync, provider) = ready_synchronizer().await;
        sync.sync(LocationStore::initialize().as_slice());

        sync.teardown();
        assert_eq!(provider.live_overlays(), 0);
        assert!(!provider.script_present());
        assert!(!sync.is_ready());

        sync.teardown();
        assert_eq!(provider.scripts_removed(), 1);
        assert_eq!(provider.live_overlays(), 0);
    }

    #[tokio::test]
    async fn test_initialize_twice_keeps_map() {
        let (mut sync, provider) = ready_synchronizer().await;

        sync.initialize(&"map".to_string(), &MapOptions::default())
            .await
            .unwrap();
        assert_eq!(provider.maps_created(), 1);
        assert_eq!(provider.load_attempts(), 1);
    }
}
