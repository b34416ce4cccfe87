//! Coordinates and viewport bounds

use serde::{Deserialize, Serialize};

use crate::location::Location;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<&Location> for LatLng {
    fn from(location: &Location) -> Self {
        Self::new(location.lat, location.lng)
    }
}

/// Accumulates the smallest rectangle containing every extended point.
///
/// An empty accumulator contains nothing. Longitudes are not wrapped across
/// the antimeridian.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatLngBounds {
    corners: Option<(LatLng, LatLng)>,
}

impl LatLngBounds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds covering every location
    pub fn from_locations<'a>(locations: impl IntoIterator<Item = &'a Location>) -> Self {
        let mut bounds = Self::new();
        for location in locations {
            bounds.extend(LatLng::from(location));
        }
        bounds
    }

    /// Grow the bounds to include `point`
    pub fn extend(&mut self, point: LatLng) {
        self.corners = Some(match self.corners {
            None => (point, point),
            Some((sw, ne)) => (
                LatLng::new(sw.lat.min(point.lat), sw.lng.min(point.lng)),
                LatLng::new(ne.lat.max(point.lat), ne.lng.max(point.lng)),
            ),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_none()
    }

    pub fn contains(&self, point: LatLng) -> bool {
        match self.corners {
            None => false,
            Some((sw, ne)) => {
                (sw.lat..=ne.lat).contains(&point.lat) && (sw.lng..=ne.lng).contains(&point.lng)
            }
        }
    }

    pub fn south_west(&self) -> Option<LatLng> {
        self.corners.map(|(sw, _)| sw)
    }

    pub fn north_east(&self) -> Option<LatLng> {
        self.corners.map(|(_, ne)| ne)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::seed_locations;

    #[test]
    fn test_empty_bounds() {
        let bounds = LatLngBounds::new();
        assert!(bounds.is_empty());
        assert!(!bounds.contains(LatLng::new(0.0, 0.0)));
        assert_eq!(bounds.south_west(), None);
    }

    #[test]
    fn test_single_point() {
        let mut bounds = LatLngBounds::new();
        bounds.extend(LatLng::new(35.1, 129.0));

        assert!(bounds.contains(LatLng::new(35.1, 129.0)));
        assert!(!bounds.contains(LatLng::new(35.2, 129.0)));
        assert_eq!(bounds.south_west(), bounds.north_east());
    }

    #[test]
    fn test_extend_corners() {
        let mut bounds = LatLngBounds::new();
        bounds.extend(LatLng::new(37.0, 127.0));
        bounds.extend(LatLng::new(35.0, 129.0));
        bounds.extend(LatLng::new(36.0, 126.0));

        assert_eq!(bounds.south_west(), Some(LatLng::new(35.0, 126.0)));
        assert_eq!(bounds.north_east(), Some(LatLng::new(37.0, 129.0)));
    }

    #[test]
    fn test_seed_coverage() {
        let seed = seed_locations();
        let bounds = LatLngBounds::from_locations(&seed);

        for location in &seed {
            assert!(bounds.contains(location.into()), "{}", location.title);
        }
    }
}
