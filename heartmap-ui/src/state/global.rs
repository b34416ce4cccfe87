//! Page State
//!
//! Reactive state shared by the page components.

use heartmap::location::{LocationDraft, LocationStore};
use leptos::*;

/// State provided to every component of the page
#[derive(Clone, Copy)]
pub struct PageState {
    /// Current location snapshot; replaced, never mutated in place
    pub locations: RwSignal<LocationStore>,
}

/// Provide page state seeded with `store`
pub fn provide_page_state(store: LocationStore) -> PageState {
    let state = PageState {
        locations: create_rw_signal(store),
    };
    provide_context(state);
    state
}

impl PageState {
    /// Append a form draft.
    ///
    /// Invalid drafts leave the store (and every observer) untouched.
    /// Returns whether the draft was accepted.
    pub fn add(&self, draft: &LocationDraft) -> bool {
        match self.locations.with_untracked(|store| store.try_append(draft)) {
            Ok(next) => {
                self.locations.set(next);
                true
            }
            Err(e) => {
                logging::debug_warn!("Ignoring location: {}", e);
                false
            }
        }
    }
}
