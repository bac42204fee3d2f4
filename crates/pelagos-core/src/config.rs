//! Configuration for the Pelagos platform.
//!
//! Supports loading from YAML files with environment variable overrides
//! (`PELAGOS_*`), validation of all settings, and sensible defaults matching
//! the hosted deployment.

use crate::error::ConfigError;
use crate::types::{CameraPreset, Coordinates, Sector};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Main application configuration.
///
/// # Examples
///
/// ```no_run
/// use pelagos_core::config::AppConfig;
///
/// let config = AppConfig::from_file("pelagos.yaml").unwrap();
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Feed revalidation intervals
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Map view settings
    #[serde(default)]
    pub map: MapConfig,
}

/// Revalidation intervals for each feed, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// PFZ advisory refresh interval
    pub pfz_secs: u64,
    /// Ocean observation refresh interval
    pub observations_secs: u64,
    /// Alert refresh interval
    pub alerts_secs: u64,
    /// Climate index refresh interval
    pub climate_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            pfz_secs: 6 * 60 * 60,
            observations_secs: 30 * 60,
            alerts_secs: 5 * 60,
            climate_secs: 24 * 60 * 60,
        }
    }
}

impl RefreshConfig {
    pub fn pfz_interval(&self) -> Duration {
        Duration::from_secs(self.pfz_secs)
    }

    pub fn observations_interval(&self) -> Duration {
        Duration::from_secs(self.observations_secs)
    }

    pub fn alerts_interval(&self) -> Duration {
        Duration::from_secs(self.alerts_secs)
    }

    pub fn climate_interval(&self) -> Duration {
        Duration::from_secs(self.climate_secs)
    }
}

/// Settings for the interactive map view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial camera center latitude
    pub center_latitude: f64,
    /// Initial camera center longitude
    pub center_longitude: f64,
    /// Initial zoom level
    pub zoom: f64,
    /// Minimum zoom level supported by the engine
    pub min_zoom: f64,
    /// Maximum zoom level supported by the engine
    pub max_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_latitude: 15.0,
            center_longitude: 78.0,
            zoom: 5.0,
            min_zoom: 0.0,
            max_zoom: 22.0,
        }
    }
}

impl MapConfig {
    /// Initial camera center as a coordinate pair.
    pub fn center(&self) -> Coordinates {
        Coordinates::new(self.center_latitude, self.center_longitude)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            refresh: RefreshConfig::default(),
            map: MapConfig::default(),
        }
    }
}

impl AppConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_yaml(&contents)
    }

    /// Loads configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::InvalidFormat {
            reason: e.to_string(),
        })
    }

    /// Loads configuration using the `config` crate, which supports
    /// multiple sources and environment variable overrides (`PELAGOS_*`).
    pub fn from_config_builder<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let config = config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .add_source(
                config::Environment::with_prefix("PELAGOS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::LoadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::InvalidFormat {
                reason: e.to_string(),
            })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map.min_zoom >= self.map.max_zoom {
            return Err(ConfigError::InvalidValue {
                field: "map.min_zoom".to_string(),
                reason: "min_zoom must be below max_zoom".to_string(),
            });
        }

        if !(self.map.min_zoom..=self.map.max_zoom).contains(&self.map.zoom) {
            return Err(ConfigError::InvalidValue {
                field: "map.zoom".to_string(),
                reason: format!(
                    "initial zoom {} outside supported range [{}, {}]",
                    self.map.zoom, self.map.min_zoom, self.map.max_zoom
                ),
            });
        }

        if !(-90.0..=90.0).contains(&self.map.center_latitude)
            || !(-180.0..=180.0).contains(&self.map.center_longitude)
        {
            return Err(ConfigError::InvalidValue {
                field: "map.center".to_string(),
                reason: "initial center outside geographic range".to_string(),
            });
        }

        for field in [
            ("refresh.pfz_secs", self.refresh.pfz_secs),
            ("refresh.observations_secs", self.refresh.observations_secs),
            ("refresh.alerts_secs", self.refresh.alerts_secs),
            ("refresh.climate_secs", self.refresh.climate_secs),
        ] {
            if field.1 == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.0.to_string(),
                    reason: "interval must be non-zero".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// The static camera preset table used by sector navigation.
///
/// One entry per sector; the navigable region list is a closed configuration.
pub fn sector_presets() -> HashMap<Sector, CameraPreset> {
    HashMap::from([
        (Sector::Gujarat, CameraPreset::new(21.5, 70.0, 7.0)),
        (Sector::Maharashtra, CameraPreset::new(18.5, 72.8, 7.0)),
        (Sector::Goa, CameraPreset::new(15.3, 74.0, 9.0)),
        (Sector::Karnataka, CameraPreset::new(14.5, 74.5, 7.0)),
        (Sector::Kerala, CameraPreset::new(10.0, 76.2, 7.0)),
        (Sector::TamilNadu, CameraPreset::new(11.0, 79.5, 7.0)),
        (Sector::AndhraPradesh, CameraPreset::new(16.0, 81.0, 7.0)),
        (Sector::Odisha, CameraPreset::new(20.0, 86.0, 7.0)),
        (Sector::WestBengal, CameraPreset::new(22.0, 88.5, 7.0)),
        (Sector::Andaman, CameraPreset::new(12.0, 92.8, 7.0)),
        (Sector::Nicobar, CameraPreset::new(8.0, 93.5, 8.0)),
        (Sector::Lakshadweep, CameraPreset::new(10.5, 72.6, 8.0)),
    ])
}

/// Bounding box covering the full Indian coastal region.
pub fn india_bounds() -> crate::types::BoundingBox {
    crate::types::BoundingBox {
        north: 28.0,
        south: 5.0,
        east: 98.0,
        west: 66.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.refresh.alerts_interval(), Duration::from_secs(300));
        assert_eq!(config.map.center(), Coordinates::new(15.0, 78.0));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let yaml = r#"
refresh:
  pfz_secs: 3600
  observations_secs: 600
  alerts_secs: 60
  climate_secs: 86400
map:
  center_latitude: 12.0
  center_longitude: 80.0
  zoom: 6.0
  min_zoom: 2.0
  max_zoom: 18.0
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.refresh.pfz_secs, 3600);
        assert_eq!(config.map.zoom, 6.0);
    }

    #[test]
    fn test_invalid_zoom_rejected() {
        let mut config = AppConfig::default();
        config.map.zoom = 50.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = AppConfig::default();
        config.refresh.alerts_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_presets_cover_every_sector() {
        let presets = sector_presets();
        for sector in Sector::ALL {
            assert!(presets.contains_key(&sector), "missing preset for {sector}");
        }
        let kerala = presets[&Sector::Kerala];
        assert_eq!(kerala.center, Coordinates::new(10.0, 76.2));
        assert_eq!(kerala.zoom, 7.0);
    }
}
