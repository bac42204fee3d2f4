//! Layer visibility state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A named, independently toggleable category of rendered features.
///
/// Only the PFZ layer renders point features today; the others are
/// visibility-gated placeholders carried in state so UI toggles round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Pfz,
    Sst,
    Chlorophyll,
    Boundaries,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayerKind::Pfz => "pfz",
            LayerKind::Sst => "sst",
            LayerKind::Chlorophyll => "chlorophyll",
            LayerKind::Boundaries => "boundaries",
        };
        write!(f, "{name}")
    }
}

/// Visibility flags per layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerState {
    visible: HashMap<LayerKind, bool>,
}

impl Default for LayerState {
    /// PFZ visible, everything else hidden.
    fn default() -> Self {
        let mut visible = HashMap::new();
        visible.insert(LayerKind::Pfz, true);
        visible.insert(LayerKind::Sst, false);
        visible.insert(LayerKind::Chlorophyll, false);
        visible.insert(LayerKind::Boundaries, false);
        Self { visible }
    }
}

impl LayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visibility of a layer. Unknown layers default to hidden.
    pub fn is_visible(&self, layer: LayerKind) -> bool {
        self.visible.get(&layer).copied().unwrap_or(false)
    }

    /// Sets the visibility of a layer. Returns the previous value.
    pub fn set_visible(&mut self, layer: LayerKind, visible: bool) -> bool {
        self.visible.insert(layer, visible).unwrap_or(false)
    }
}
