//! In-process retained-mode engine.
//!
//! `HeadlessEngine` retains features, a single popup slot, and a camera in
//! memory. It renders nothing but honors the full engine contract, which makes
//! it the engine of choice for the demo binary and for every lifecycle test.

use crate::camera::CameraState;
use crate::engine::{EngineError, MapEngine, Popup};
use crate::feature::{Feature, FeatureKey, FeatureProperties};
use async_trait::async_trait;
use pelagos_core::types::Coordinates;
use std::collections::HashMap;
use std::time::Duration;
use tracing::trace;

/// Simulated engine startup latency.
const LOAD_DELAY: Duration = Duration::from_millis(10);

/// A retained-mode map engine with no rendering backend.
#[derive(Debug)]
pub struct HeadlessEngine {
    features: HashMap<FeatureKey, Feature>,
    popup: Option<Popup>,
    camera: CameraState,
    /// Settle target and duration of the last ease, for inspection
    last_ease: Option<(CameraState, Duration)>,
    loaded: bool,
    destroyed: bool,
    /// When set, `load` fails; models a detached container or a construction
    /// throw in a real engine
    fail_load: bool,
}

impl HeadlessEngine {
    /// Creates an engine whose camera starts at the given pose.
    pub fn new(center: Coordinates, zoom: f64) -> Self {
        Self {
            features: HashMap::new(),
            popup: None,
            camera: CameraState::new(center, zoom),
            last_ease: None,
            loaded: false,
            destroyed: false,
            fail_load: false,
        }
    }

    /// Creates an engine that fails its asynchronous load.
    pub fn failing(center: Coordinates, zoom: f64) -> Self {
        Self {
            fail_load: true,
            ..Self::new(center, zoom)
        }
    }

    /// Duration of the last camera ease, if any.
    pub fn last_ease_duration(&self) -> Option<Duration> {
        self.last_ease.map(|(_, d)| d)
    }

    /// The retained feature for a key, if present.
    pub fn feature(&self, key: &FeatureKey) -> Option<&Feature> {
        self.features.get(key)
    }

    /// Keys of all retained features, in no particular order.
    pub fn feature_keys(&self) -> Vec<FeatureKey> {
        self.features.keys().cloned().collect()
    }
}

#[async_trait]
impl MapEngine for HeadlessEngine {
    async fn load(&mut self) -> Result<(), EngineError> {
        tokio::time::sleep(LOAD_DELAY).await;
        if self.fail_load {
            return Err(EngineError::InitFailed {
                reason: "container detached".to_string(),
            });
        }
        self.loaded = true;
        Ok(())
    }

    fn add_feature(&mut self, feature: Feature) {
        trace!(key = %feature.key, "add feature");
        self.features.insert(feature.key.clone(), feature);
    }

    fn update_feature(
        &mut self,
        key: &FeatureKey,
        properties: FeatureProperties,
    ) -> Result<(), EngineError> {
        match self.features.get_mut(key) {
            Some(feature) => {
                feature.properties = properties;
                Ok(())
            }
            None => Err(EngineError::UnknownFeature {
                key: key.to_string(),
            }),
        }
    }

    fn remove_feature(&mut self, key: &FeatureKey) -> Result<(), EngineError> {
        trace!(key = %key, "remove feature");
        match self.features.remove(key) {
            Some(_) => Ok(()),
            None => Err(EngineError::UnknownFeature {
                key: key.to_string(),
            }),
        }
    }

    fn feature_count(&self) -> usize {
        self.features.len()
    }

    fn show_popup(&mut self, popup: Popup) {
        // Single popup slot: showing replaces whatever was there
        self.popup = Some(popup);
    }

    fn close_popup(&mut self) {
        self.popup = None;
    }

    fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    fn ease_to(&mut self, target: CameraState, duration: Duration) {
        // No frame loop, so the camera settles at the target immediately.
        // Retargeting mid-animation is therefore last-write-wins for free.
        self.camera = target;
        self.last_ease = Some((target, duration));
    }

    fn camera(&self) -> CameraState {
        self.camera
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.features.clear();
        self.popup = None;
        self.loaded = false;
        self.destroyed = true;
    }
}
