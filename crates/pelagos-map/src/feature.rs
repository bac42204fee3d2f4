//! Rendered feature primitives.
//!
//! A feature is the engine-level point primitive derived from one advisory
//! zone. The key joins domain data to rendered primitives and makes the
//! synchronizer's diff well-defined.

use pelagos_core::types::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a rendered feature: `advisoryId:zoneId`.
///
/// Advisory ids are globally unique and zone ids are unique within their
/// advisory, so the joined key is globally unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureKey(String);

impl FeatureKey {
    /// Builds the key for a zone of an advisory.
    pub fn new(advisory_id: &str, zone_id: &str) -> Self {
        Self(format!("{advisory_id}:{zone_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Properties attached to a rendered zone feature.
///
/// These drive popup content and marker styling; they can change between
/// snapshots while the key stays the same, in which case the feature is
/// updated in place rather than recreated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    /// Human-readable sector name
    pub sector: String,
    /// Sea surface temperature in degrees Celsius (0 when unreported)
    pub sst: f64,
    /// Water depth in meters (0 when unreported)
    pub depth: f64,
    /// Comma-joined names of the top expected species
    pub species: String,
}

/// A point primitive handed to the rendering engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub key: FeatureKey,
    pub point: Coordinates,
    pub properties: FeatureProperties,
}
