//! In-memory map provider
//!
//! Models a map surface without a widget library: it tracks live overlays,
//! the last fitted bounds and whether the library "script" is registered.
//! Clones share one surface, so a test can keep a handle while a
//! [`MapSynchronizer`](super::MapSynchronizer) owns another.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use async_trait::async_trait;

use super::error::{MapError, MapResult};
use super::geo::LatLngBounds;
use super::marker::MarkerSpec;
use super::provider::{MapOptions, MapProvider};

/// Handle to a recorded map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedMap {
    pub id: u64,
}

/// Handle to a recorded overlay
#[derive(Debug, PartialEq, Eq)]
pub struct RecordedOverlay {
    pub id: u64,
}

#[derive(Debug, Default)]
struct Surface {
    next_id: u64,
    overlays: BTreeMap<u64, MarkerSpec>,
    bounds: Option<LatLngBounds>,
    maps: Vec<(String, MapOptions)>,
    script_present: bool,
    scripts_removed: usize,
    load_attempts: usize,
    load_error: Option<MapError>,
    failing_titles: HashSet<String>,
}

impl Surface {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// [`MapProvider`] backed by shared in-memory state
#[derive(Debug, Clone, Default)]
pub struct RecordingProvider {
    surface: Rc<RefCell<Surface>>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later `load` fail with `error`
    pub fn fail_load(&self, error: MapError) {
        self.surface.borrow_mut().load_error = Some(error);
    }

    /// Make overlay creation fail for markers titled `title`
    pub fn fail_overlay_for(&self, title: impl Into<String>) {
        self.surface.borrow_mut().failing_titles.insert(title.into());
    }

    /// Number of overlays currently on the surface
    pub fn live_overlays(&self) -> usize {
        self.surface.borrow().overlays.len()
    }

    /// Live markers in creation order
    pub fn live_markers(&self) -> Vec<MarkerSpec> {
        self.surface.borrow().overlays.values().cloned().collect()
    }

    /// Bounds of the most recent `set_bounds` call
    pub fn last_bounds(&self) -> Option<LatLngBounds> {
        self.surface.borrow().bounds
    }

    pub fn maps_created(&self) -> usize {
        self.surface.borrow().maps.len()
    }

    pub fn load_attempts(&self) -> usize {
        self.surface.borrow().load_attempts
    }

    /// Whether the library is currently registered
    pub fn script_present(&self) -> bool {
        self.surface.borrow().script_present
    }

    /// How many times a registered library was actually released
    pub fn scripts_removed(&self) -> usize {
        self.surface.borrow().scripts_removed
    }
}

#[async_trait(?Send)]
impl MapProvider for RecordingProvider {
    type Container = String;
    type Map = RecordedMap;
    type Overlay = RecordedOverlay;

    async fn load(&self) -> MapResult<()> {
        let mut surface = self.surface.borrow_mut();
        surface.load_attempts += 1;

        if let Some(e) = surface.load_error.clone() {
            return Err(e);
        }

        surface.script_present = true;
        Ok(())
    }

    fn create_map(&self, container: &String, options: &MapOptions) -> MapResult<RecordedMap> {
        let mut surface = self.surface.borrow_mut();
        if !surface.script_present {
            return Err(MapError::NamespaceMissing("library not loaded".to_string()));
        }

        surface.maps.push((container.clone(), *options));
        Ok(RecordedMap {
            id: surface.next_id(),
        })
    }

    fn create_overlay(&self, _map: &RecordedMap, marker: &MarkerSpec) -> MapResult<RecordedOverlay> {
        let mut surface = self.surface.borrow_mut();
        if surface.failing_titles.contains(&marker.title) {
            return Err(MapError::OverlayCreation(marker.title.clone()));
        }

        let id = surface.next_id();
        surface.overlays.insert(id, marker.clone());
        Ok(RecordedOverlay { id })
    }

    fn remove_overlay(&self, overlay: RecordedOverlay) {
        self.surface.borrow_mut().overlays.remove(&overlay.id);
    }

    fn set_bounds(&self, _map: &RecordedMap, bounds: &LatLngBounds) {
        self.surface.borrow_mut().bounds = Some(*bounds);
    }

    fn release(&self) {
        let mut surface = self.surface.borrow_mut();
        if surface.script_present {
            surface.script_present = false;
            surface.scripts_removed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::LatLng;

    #[tokio::test]
    async fn test_create_map_requires_load() {
        let provider = RecordingProvider::new();
        let err = provider
            .create_map(&"map".to_string(), &MapOptions::default())
            .unwrap_err();
        assert!(matches!(err, MapError::NamespaceMissing(_)));

        provider.load().await.unwrap();
        assert!(provider
            .create_map(&"map".to_string(), &MapOptions::default())
            .is_ok());
    }

    #[tokio::test]
    async fn test_overlay_lifecycle() {
        let provider = RecordingProvider::new();
        provider.load().await.unwrap();
        let map = provider
            .create_map(&"map".to_string(), &MapOptions::default())
            .unwrap();

        let spec = MarkerSpec {
            position: LatLng::new(1.0, 2.0),
            title: "a".to_string(),
            anchor: crate::map::Anchor::Bottom,
        };
        let overlay = provider.create_overlay(&map, &spec).unwrap();
        assert_eq!(provider.live_markers(), vec![spec]);

        provider.remove_overlay(overlay);
        assert_eq!(provider.live_overlays(), 0);
    }

    #[test]
    fn test_release_without_load() {
        let provider = RecordingProvider::new();
        provider.release();
        assert_eq!(provider.scripts_removed(), 0);
    }
}
