//! Page settings
//!
//! What the browser page loads at startup: header text, map widget settings
//! and the seed locations. Served by the HTTP host and consumed by the UI.

use serde::{Deserialize, Serialize};

use crate::config::{Config, MapConfig};
use crate::location::Location;
use crate::map::{LatLng, MapOptions};

/// Everything the page needs to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSettings {
    pub title: String,
    pub subtitle: String,
    pub map: MapSettings,
    pub locations: Vec<Location>,
}

/// Map widget settings for the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    /// Full SDK script URL including the app key
    pub script_url: String,
    pub center: LatLng,
    pub level: u8,
}

impl MapSettings {
    pub fn options(&self) -> MapOptions {
        MapOptions {
            center: self.center,
            level: self.level,
        }
    }
}

impl From<&MapConfig> for MapSettings {
    fn from(map: &MapConfig) -> Self {
        let options = map.options();
        Self {
            script_url: map.script_url(),
            center: options.center,
            level: options.level,
        }
    }
}

impl PageSettings {
    pub fn new(config: &Config, locations: Vec<Location>) -> Self {
        Self {
            title: config.page.title.clone(),
            subtitle: config.page.subtitle.clone(),
            map: MapSettings::from(&config.map),
            locations,
        }
    }

    /// Subtitle split into display lines
    pub fn subtitle_lines(&self) -> impl Iterator<Item = &str> {
        self.subtitle.lines()
    }
}

impl From<&Config> for PageSettings {
    fn from(config: &Config) -> Self {
        Self::new(config, config.seed())
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}
