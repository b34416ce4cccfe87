//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::location::{seed_locations, Location};
use crate::map::{LatLng, MapOptions};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Seed list override; the built-in list is used when absent
    #[serde(default)]
    pub locations: Option<Vec<Location>>,
}

/// Page header text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

fn default_title() -> String {
    "고은💕태훈".to_string()
}

fn default_subtitle() -> String {
    "함께한 모든 순간이 특별했고,\n앞으로도 더 많은 추억을 만들어가고 싶어요".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
        }
    }
}

/// Map widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Kakao JavaScript app key
    #[serde(default)]
    pub app_key: String,

    #[serde(default = "default_sdk_url")]
    pub sdk_url: String,

    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    #[serde(default = "default_center_lng")]
    pub center_lng: f64,

    #[serde(default = "default_level")]
    pub level: u8,
}

fn default_sdk_url() -> String {
    "https://dapi.kakao.com/v2/maps/sdk.js".to_string()
}

fn default_center_lat() -> f64 {
    crate::map::provider::DEFAULT_CENTER.lat
}

fn default_center_lng() -> f64 {
    crate::map::provider::DEFAULT_CENTER.lng
}

fn default_level() -> u8 {
    crate::map::provider::DEFAULT_LEVEL
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            app_key: String::new(),
            sdk_url: default_sdk_url(),
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            level: default_level(),
        }
    }
}

impl MapConfig {
    /// Initial view for a new map surface
    pub fn options(&self) -> MapOptions {
        MapOptions {
            center: LatLng::new(self.center_lat, self.center_lng),
            level: self.level,
        }
    }

    /// SDK script URL with the app key, loaded without autoload
    pub fn script_url(&self) -> String {
        format!("{}?appkey={}&autoload=false", self.sdk_url, self.app_key)
    }
}

/// HTTP host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built page (index.html, wasm, js)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "./heartmap-ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Seed coordinates must be finite so the fitted bounds cover them
    fn validate(&self) -> Result<(), ConfigError> {
        let Some(locations) = &self.locations else {
            return Ok(());
        };

        match locations
            .iter()
            .position(|l| !l.lat.is_finite() || !l.lng.is_finite())
        {
            Some(index) => Err(ConfigError::InvalidLocation {
                index,
                title: locations[index].title.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> LoadedConfig {
        let mut config = Config::default();
        let warnings = config.apply_env_overrides();

        LoadedConfig {
            config,
            source: None,
            warnings,
        }
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let mut config = Self::load(path)?;
        let warnings = config.apply_env_overrides();

        Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
            warnings,
        })
    }

    /// Load from default locations or environment
    #[cfg(feature = "server")]
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("heartmap").join("config.toml")),
            Some(PathBuf::from("/etc/heartmap/config.toml")),
            Some(PathBuf::from("./heartmap.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file of `paths` that parses.
    ///
    /// Files that exist but fail to load are skipped and reported in
    /// [`LoadedConfig::warnings`]; with none left the defaults are used.
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(mut loaded) => {
                    skipped.append(&mut loaded.warnings);
                    loaded.warnings = skipped;
                    return loaded;
                }
                Err(e) => skipped.push(e),
            }
        }

        let mut loaded = Self::from_env();
        skipped.append(&mut loaded.warnings);
        loaded.warnings = skipped;
        loaded
    }

    /// Seed list: the configured one, or the built-in list
    pub fn seed(&self) -> Vec<Location> {
        self.locations.clone().unwrap_or_else(seed_locations)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Vec<ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides looked up through `var`; unusable values are
    /// returned instead of applied
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Vec<ConfigError> {
        let mut warnings = Vec::new();

        if let Some(host) = var("HEARTMAP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("HEARTMAP_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => warnings.push(ConfigError::InvalidEnv {
                    var: "HEARTMAP_PORT",
                    value: port,
                }),
            }
        }
        if let Some(dir) = var("HEARTMAP_STATIC_DIR") {
            self.server.static_dir = dir;
        }

        if let Some(key) = var("HEARTMAP_APP_KEY") {
            self.map.app_key = key;
        }

        if let Some(level) = var("HEARTMAP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("HEARTMAP_LOG_FORMAT") {
            self.logging.format = format;
        }

        warnings
    }
}

/// A loaded configuration and the problems skipped on the way
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the settings came from; `None` means defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigError>,
}

impl LoadedConfig {
    /// Log where the settings came from and what was skipped.
    ///
    /// Call once a subscriber is installed.
    pub fn log(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }

        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Location #{index} ({title:?}) has a non-finite coordinate")]
    InvalidLocation { index: usize, title: String },

    #[error("Ignoring invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Heartmap Configuration
#
# Environment variables override these settings:
# - HEARTMAP_HOST
# - HEARTMAP_PORT
# - HEARTMAP_STATIC_DIR
# - HEARTMAP_APP_KEY
# - HEARTMAP_LOG_LEVEL
# - HEARTMAP_LOG_FORMAT

[page]
title = "고은💕태훈"
subtitle = """
함께한 모든 순간이 특별했고,
앞으로도 더 많은 추억을 만들어가고 싶어요"""

[map]
# Kakao JavaScript app key (developers.kakao.com)
app_key = ""

# SDK script endpoint
sdk_url = "https://dapi.kakao.com/v2/maps/sdk.js"

# Initial view before markers are fitted
center_lat = 37.5
center_lng = 127.5
level = 14

[server]
host = "0.0.0.0"
port = 8080

# Built page directory (trunk build output)
static_dir = "./heartmap-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Replace the built-in places:
#
# [[locations]]
# title = "오이도"
# lat = 37.34639692396398
# lng = 126.68819399072788
"#
    .to_string()
}
