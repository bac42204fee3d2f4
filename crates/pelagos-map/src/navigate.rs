//! Sector-to-camera navigation.

use pelagos_core::types::{CameraPreset, Sector};
use std::collections::HashMap;
use tracing::debug;

/// Resolves sector identifiers to camera presets.
///
/// The preset table is static configuration supplied at startup; a sector
/// without a preset is a silent no-op, not an error.
#[derive(Debug, Clone)]
pub struct SectorNavigator {
    presets: HashMap<Sector, CameraPreset>,
}

impl SectorNavigator {
    pub fn new(presets: HashMap<Sector, CameraPreset>) -> Self {
        Self { presets }
    }

    /// The camera preset for a sector, if one is configured.
    pub fn resolve(&self, sector: Sector) -> Option<CameraPreset> {
        let preset = self.presets.get(&sector).copied();
        if preset.is_none() {
            debug!(%sector, "No camera preset for sector, ignoring selection");
        }
        preset
    }

    /// Sectors with a configured preset, for building quick-nav controls.
    pub fn sectors(&self) -> Vec<Sector> {
        self.presets.keys().copied().collect()
    }
}
