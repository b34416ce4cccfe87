//! Location types
//!
//! A [`Location`] is a named point. A [`LocationDraft`] is the raw text of the
//! add-location form before it has been parsed.

use serde::{Deserialize, Serialize};

use super::error::{DraftError, DraftResult};

/// A named geographic point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Label shown on hover and in the tag list
    pub title: String,
    /// Latitude in degrees, expected within [-90, 90] but not checked
    pub lat: f64,
    /// Longitude in degrees, expected within [-180, 180] but not checked
    pub lng: f64,
}

impl Location {
    /// Create a new location
    pub fn new(title: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            title: title.into(),
            lat,
            lng,
        }
    }
}

/// Raw add-location form state, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationDraft {
    pub title: String,
    pub lat: String,
    pub lng: String,
}

impl LocationDraft {
    /// Create a draft from field values
    pub fn new(title: impl Into<String>, lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    /// Parse the draft into a location.
    ///
    /// The title is kept as typed but must contain something besides
    /// whitespace. Both coordinates must parse as finite numbers; their ranges
    /// are not checked.
    pub fn parse(&self) -> DraftResult<Location> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }

        let lat = parse_coordinate("lat", &self.lat)?;
        let lng = parse_coordinate("lng", &self.lng)?;

        Ok(Location::new(self.title.clone(), lat, lng))
    }
}

fn parse_coordinate(field: &'static str, raw: &str) -> DraftResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DraftError::MissingCoordinate { field });
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DraftError::InvalidCoordinate {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_draft() {
        let draft = LocationDraft::new("Busan", "35.1", "129.0");
        let location = draft.parse().unwrap();

        assert_eq!(location, Location::new("Busan", 35.1, 129.0));
    }

    #[test]
    fn test_parse_keeps_title_as_typed() {
        let draft = LocationDraft::new("  Jeju  ", " 33.5 ", "126.5\n");
        let location = draft.parse().unwrap();

        assert_eq!(location.title, "  Jeju  ");
        assert_eq!(location.lat, 33.5);
        assert_eq!(location.lng, 126.5);
    }

    #[test]
    fn test_parse_rejects_empty_title() {
        let draft = LocationDraft::new("", "35.1", "129.0");
        assert_eq!(draft.parse(), Err(DraftError::EmptyTitle));

        let draft = LocationDraft::new("   ", "35.1", "129.0");
        assert_eq!(draft.parse(), Err(DraftError::EmptyTitle));
    }

    #[test]
    fn test_parse_rejects_missing_coordinates() {
        let draft = LocationDraft::new("X", "", "129.0");
        assert_eq!(
            draft.parse(),
            Err(DraftError::MissingCoordinate { field: "lat" })
        );

        let draft = LocationDraft::new("X", "35.1", "");
        assert_eq!(
            draft.parse(),
            Err(DraftError::MissingCoordinate { field: "lng" })
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let draft = LocationDraft::new("X", "north", "129.0");
        assert!(matches!(
            draft.parse(),
            Err(DraftError::InvalidCoordinate { field: "lat", .. })
        ));

        let draft = LocationDraft::new("X", "35.1", "NaN");
        assert!(matches!(
            draft.parse(),
            Err(DraftError::InvalidCoordinate { field: "lng", .. })
        ));

        let draft = LocationDraft::new("X", "inf", "129.0");
        assert!(draft.parse().is_err());
    }

    #[test]
    fn test_parse_accepts_zero_and_out_of_range() {
        let draft = LocationDraft::new("Null Island", "0", "0");
        assert_eq!(draft.parse().unwrap(), Location::new("Null Island", 0.0, 0.0));

        // Ranges are not validated
        let draft = LocationDraft::new("Nowhere", "120", "-300");
        assert!(draft.parse().is_ok());
    }

    #[test]
    fn test_location_serde() {
        let json = r#"{"title":"강릉","lat":37.7519,"lng":128.876}"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location, Location::new("강릉", 37.7519, 128.876));
    }
}
