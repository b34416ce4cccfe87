//! Location Store
//!
//! The ordered, append-only list of places shown on the page.
//!
//! A [`LocationStore`] is an immutable snapshot. Appending produces a new
//! snapshot and leaves the previous one untouched, so reactive observers can
//! detect a change by comparing snapshots with [`LocationStore::same_snapshot`].

pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use error::{DraftError, DraftResult};
pub use seed::seed_locations;
pub use store::LocationStore;
pub use types::{Location, LocationDraft};
