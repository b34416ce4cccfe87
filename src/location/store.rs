//! Location snapshots
//!
//! [`LocationStore`] wraps an `Arc<[Location]>`. Cloning is cheap and a
//! snapshot is never mutated after it is built.

use std::sync::Arc;

use super::error::DraftResult;
use super::seed::seed_locations;
use super::types::{Location, LocationDraft};

/// Immutable, ordered snapshot of the page's locations
#[derive(Debug, Clone)]
pub struct LocationStore {
    locations: Arc<[Location]>,
}

impl LocationStore {
    /// Snapshot holding the built-in seed list
    pub fn initialize() -> Self {
        Self::from_seed(seed_locations())
    }

    /// Snapshot holding a caller-provided seed list
    pub fn from_seed(locations: Vec<Location>) -> Self {
        Self {
            locations: locations.into(),
        }
    }

    /// Append a parsed draft, returning the new snapshot.
    ///
    /// `self` is left as it was.
    pub fn try_append(&self, draft: &LocationDraft) -> DraftResult<Self> {
        let location = draft.parse()?;

        let mut next = Vec::with_capacity(self.locations.len() + 1);
        next.extend_from_slice(&self.locations);
        next.push(location);

        tracing::debug!(count = next.len(), "Location appended");

        Ok(Self {
            locations: next.into(),
        })
    }

    /// Append a draft, ignoring invalid input.
    ///
    /// On rejection the returned snapshot is the same allocation as `self`.
    pub fn append(&self, draft: &LocationDraft) -> Self {
        match self.try_append(draft) {
            Ok(next) => next,
            Err(e) => {
                tracing::debug!(reason = %e, "Ignoring invalid location draft");
                self.clone()
            }
        }
    }

    /// Whether both values share one snapshot
    pub fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.locations, &other.locations)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.locations
    }
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::initialize()
    }
}

impl PartialEq for LocationStore {
    fn eq(&self, other: &Self) -> bool {
        self.same_snapshot(other) || self.locations == other.locations
    }
}

impl<'a> IntoIterator for &'a LocationStore {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
