//! Location signal to map binding
//!
//! Owns the map synchronizer for one map surface and redraws it whenever the
//! location store changes or the map becomes ready.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use heartmap::location::LocationStore;
use heartmap::map::{MapOptions, MapProvider, MapSynchronizer};
use leptos::*;

/// A map synchronizer bound to the page's location signal
pub struct MapBinding<P: MapProvider> {
    slot: Rc<RefCell<Option<MapSynchronizer<P>>>>,
    disposed: Rc<Cell<bool>>,
    ready: RwSignal<bool>,
}

impl<P: MapProvider> Clone for MapBinding<P> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
            disposed: Rc::clone(&self.disposed),
            ready: self.ready,
        }
    }
}

impl<P: MapProvider + 'static> MapBinding<P> {
    /// Bind `locations` and register the redraw effect
    pub fn new(locations: RwSignal<LocationStore>) -> Self {
        let binding = Self {
            slot: Rc::new(RefCell::new(None)),
            disposed: Rc::new(Cell::new(false)),
            ready: create_rw_signal(false),
        };

        let slot = Rc::clone(&binding.slot);
        let ready = binding.ready;
        // Runs synchronously, in the browser and in native tests alike
        create_isomorphic_effect(move |_| {
            let ready = ready.get();
            locations.with(|store| {
                if !ready {
                    return;
                }
                if let Some(sync) = slot.borrow_mut().as_mut() {
                    sync.sync(store.as_slice());
                }
            });
        });

        binding
    }

    /// Create the map inside `container`.
    ///
    /// When the binding was disposed while the library was loading, the new
    /// map is torn down straight away.
    pub async fn attach(&self, provider: P, container: P::Container, options: MapOptions) {
        let mut sync = MapSynchronizer::new(provider);
        let result = sync.initialize(&container, &options).await;

        if self.disposed.get() {
            sync.teardown();
            return;
        }

        if let Err(e) = &result {
            logging::error!("Map initialization failed: {}", e);
        }

        // Kept after a failure so dispose still releases the library
        *self.slot.borrow_mut() = Some(sync);

        if result.is_ok() {
            self.ready.set(true);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get_untracked()
    }

    /// Tear the map down.
    ///
    /// Returns `false` when no map was attached yet; an attach still in
    /// flight tears its own map down when it finishes.
    pub fn dispose(&self) -> bool {
        self.disposed.set(true);

        let attached = self.slot.borrow_mut().take();
        match attached {
            Some(mut sync) => {
                sync.teardown();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartmap::location::LocationDraft;
    use heartmap::map::{MapError, RecordingProvider};

    fn container() -> String {
        "map".to_string()
    }

    fn append(locations: RwSignal<LocationStore>, title: &str, lat: &str, lng: &str) {
        let draft = LocationDraft::new(title, lat, lng);
        locations.update(|store| *store = store.append(&draft));
    }

    #[tokio::test]
    async fn test_append_while_ready_redraws() {
        let runtime = create_runtime();

        let locations = create_rw_signal(LocationStore::initialize());
        let provider = RecordingProvider::new();
        let binding = MapBinding::new(locations);

        binding
            .attach(provider.clone(), container(), MapOptions::default())
            .await;
        assert!(binding.is_ready());

        let count = locations.with_untracked(LocationStore::len);
        assert_eq!(provider.live_overlays(), count);

        append(locations, "Busan", "35.1", "129.0");
        assert_eq!(provider.live_overlays(), count + 1);

        // Rejected drafts leave the markers alone
        append(locations, "", "35.1", "129.0");
        assert_eq!(provider.live_overlays(), count + 1);

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_append_before_ready_draws_on_attach() {
        let runtime = create_runtime();

        let locations = create_rw_signal(LocationStore::initialize());
        let provider = RecordingProvider::new();
        let binding = MapBinding::new(locations);

        append(locations, "Busan", "35.1", "129.0");
        assert_eq!(provider.live_overlays(), 0);
        assert_eq!(provider.maps_created(), 0);

        binding
            .attach(provider.clone(), container(), MapOptions::default())
            .await;

        let count = locations.with_untracked(LocationStore::len);
        assert_eq!(provider.live_overlays(), count);
        assert_eq!(
            provider.live_markers().last().map(|m| m.title.as_str()),
            Some("Busan")
        );

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_dispose_before_attach_finishes() {
        let runtime = create_runtime();

        let locations = create_rw_signal(LocationStore::initialize());
        let provider = RecordingProvider::new();
        let binding = MapBinding::new(locations);

        let attach = binding.attach(provider.clone(), container(), MapOptions::default());
        assert!(!binding.dispose());
        attach.await;

        assert!(!binding.is_ready());
        assert_eq!(provider.live_overlays(), 0);
        assert_eq!(provider.scripts_removed(), 1);
        assert!(!provider.script_present());

        append(locations, "Busan", "35.1", "129.0");
        assert_eq!(provider.live_overlays(), 0);

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_dispose_after_ready() {
        let runtime = create_runtime();

        let locations = create_rw_signal(LocationStore::initialize());
        let provider = RecordingProvider::new();
        let binding = MapBinding::new(locations);

        binding
            .attach(provider.clone(), container(), MapOptions::default())
            .await;
        assert!(provider.live_overlays() > 0);

        assert!(binding.dispose());
        assert_eq!(provider.live_overlays(), 0);
        assert_eq!(provider.scripts_removed(), 1);

        // Second dispose finds nothing left to release
        assert!(!binding.dispose());
        assert_eq!(provider.scripts_removed(), 1);

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_failed_load_never_draws() {
        let runtime = create_runtime();

        let locations = create_rw_signal(LocationStore::initialize());
        let provider = RecordingProvider::new();
        provider.fail_load(MapError::LibraryLoad("offline".to_string()));
        let binding = MapBinding::new(locations);

        binding
            .attach(provider.clone(), container(), MapOptions::default())
            .await;
        assert!(!binding.is_ready());

        append(locations, "Busan", "35.1", "129.0");
        assert_eq!(provider.live_overlays(), 0);
        assert_eq!(provider.load_attempts(), 1);

        // The failed synchronizer is still held so it can be released
        assert!(binding.dispose());

        runtime.dispose();
    }
}
