//! Core types for the Pelagos marine-data platform.
//!
//! This crate defines the domain model shared by every other crate in the
//! workspace: coastal sectors, fishing-zone advisories, ocean observations,
//! alerts, climate indices, and the configuration that drives the feed
//! pollers and the map view.

pub mod config;
pub mod error;
pub mod types;
pub mod validate;

pub use config::{sector_presets, AppConfig, MapConfig, RefreshConfig};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use types::{
    Alert, AlertSeverity, AlertType, BoundingBox, CameraPreset, CatchOutlook, ClimateIndex,
    Coordinates, DataSource, FishSpecies, IndexStatus, OceanObservation, OceanObservationSummary,
    PfzAdvisory, PfzZone, Sector, WeatherBulletin,
};
