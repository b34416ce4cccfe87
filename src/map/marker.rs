//! Heart Markers
//!
//! Placement and hover styling for the marker drawn at each location.
//! Providers turn a [`MarkerSpec`] into a widget overlay and apply the
//! [`MarkerStyle`] returned by [`HoverState`] on pointer enter/leave.

use super::geo::LatLng;
use crate::location::Location;

/// Glyph drawn as the marker icon
pub const HEART_GLYPH: &str = "❤️";

/// Icon scale while hovered
pub const HOVER_SCALE: f64 = 1.2;

/// CSS transition for the icon scale
pub const ICON_TRANSITION: &str = "transform 0.3s ease";

/// CSS transition for the label fade
pub const LABEL_TRANSITION: &str = "opacity 0.3s ease";

/// Which point of the marker sits on the coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Visual base of the marker on the coordinate
    Bottom,
    Center,
}

impl Anchor {
    /// Vertical anchor as a fraction of the marker height, 0 = top
    pub fn y_fraction(self) -> f64 {
        match self {
            Anchor::Bottom => 1.0,
            Anchor::Center => 0.5,
        }
    }
}

/// Everything a provider needs to draw one marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: LatLng,
    pub title: String,
    pub anchor: Anchor,
}

impl From<&Location> for MarkerSpec {
    fn from(location: &Location) -> Self {
        Self {
            position: LatLng::from(location),
            title: location.title.clone(),
            anchor: Anchor::Bottom,
        }
    }
}

/// Visual state of a marker's icon and label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub scale: f64,
    pub label_opacity: f64,
}

impl MarkerStyle {
    /// Default look: normal size, label hidden
    pub const RESTING: MarkerStyle = MarkerStyle {
        scale: 1.0,
        label_opacity: 0.0,
    };

    /// Hovered look: enlarged icon, label shown
    pub const HOVERED: MarkerStyle = MarkerStyle {
        scale: HOVER_SCALE,
        label_opacity: 1.0,
    };

    /// CSS `transform` value for the icon
    pub fn icon_transform(&self) -> String {
        format!("scale({})", self.scale)
    }

    /// CSS `opacity` value for the label
    pub fn label_opacity_css(&self) -> String {
        self.label_opacity.to_string()
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self::RESTING
    }
}

/// Pointer hover tracking for one marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: bool,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pointer entered the marker
    pub fn enter(&mut self) -> MarkerStyle {
        self.hovered = true;
        self.style()
    }

    /// Pointer left the marker
    pub fn leave(&mut self) -> MarkerStyle {
        self.hovered = false;
        self.style()
    }

    pub fn style(&self) -> MarkerStyle {
        if self.hovered {
            MarkerStyle::HOVERED
        } else {
            MarkerStyle::RESTING
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_from_location() {
        let spec = MarkerSpec::from(&Location::new("Busan", 35.1, 129.0));

        assert_eq!(spec.position, LatLng::new(35.1, 129.0));
        assert_eq!(spec.title, "Busan");
        assert_eq!(spec.anchor, Anchor::Bottom);
        assert_eq!(spec.anchor.y_fraction(), 1.0);
    }

    #[test]
    fn test_hover_enter_leave_restores() {
        let mut hover = HoverState::new();
        let before = hover.style();

        let hovered = hover.enter();
        assert_eq!(hovered.scale, 1.2);
        assert_eq!(hovered.label_opacity, 1.0);

        let after = hover.leave();
        assert_eq!(after, before);
        assert_eq!(after, MarkerStyle::RESTING);
    }

    #[test]
    fn test_repeated_enter() {
        let mut hover = HoverState::new();
        hover.enter();
        assert_eq!(hover.enter(), MarkerStyle::HOVERED);
        assert_eq!(hover.leave(), MarkerStyle::RESTING);
        assert!(!hover.is_hovered());
    }

    #[test]
    fn test_css_values() {
        assert_eq!(MarkerStyle::RESTING.icon_transform(), "scale(1)");
        assert_eq!(MarkerStyle::HOVERED.icon_transform(), "scale(1.2)");
        assert_eq!(MarkerStyle::RESTING.label_opacity_css(), "0");
        assert_eq!(MarkerStyle::HOVERED.label_opacity_css(), "1");
    }
}
