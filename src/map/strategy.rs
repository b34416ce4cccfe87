//! Redraw Strategies
//!
//! How the set of live overlays is brought in line with a location sequence.
//! Only [`FullRedraw`] exists; an indexed diff can implement the same trait
//! without touching the location store.

use super::marker::MarkerSpec;
use super::provider::MapProvider;
use crate::location::Location;

/// Outcome counts of one redraw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawCounts {
    pub removed: usize,
    pub created: usize,
    pub failed: usize,
}

/// Reconciles `overlays` with `locations`
pub trait RedrawStrategy<P: MapProvider> {
    fn redraw(
        &mut self,
        provider: &P,
        map: &P::Map,
        overlays: &mut Vec<P::Overlay>,
        locations: &[Location],
    ) -> RedrawCounts;
}

/// Remove every overlay, then create one per location in order.
///
/// Linear in the number of locations on every change; fine for tens of
/// markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullRedraw;

impl<P: MapProvider> RedrawStrategy<P> for FullRedraw {
    fn redraw(
        &mut self,
        provider: &P,
        map: &P::Map,
        overlays: &mut Vec<P::Overlay>,
        locations: &[Location],
    ) -> RedrawCounts {
        let mut counts = RedrawCounts {
            removed: overlays.len(),
            ..Default::default()
        };

        for overlay in overlays.drain(..) {
            provider.remove_overlay(overlay);
        }

        for location in locations {
            match provider.create_overlay(map, &MarkerSpec::from(location)) {
                Ok(overlay) => {
                    overlays.push(overlay);
                    counts.created += 1;
                }
                Err(e) => {
                    tracing::warn!(title = %location.title, error = %e, "Skipping marker");
                    counts.failed += 1;
                }
            }
        }

        counts
    }
}
