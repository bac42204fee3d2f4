//! The map surface: engine ownership and lifecycle.
//!
//! `MapSurface` owns the single engine instance and composes the camera
//! controller, feature synchronizer, interaction controller, and sector
//! navigator around it. Its lifecycle is a linear state machine:
//!
//! ```text
//! Uninitialized -> Initializing -> Ready -> Disposed
//! ```
//!
//! with no backward transitions; `Disposed` is terminal. Operations issued
//! before `Ready` are buffered and replayed in issuance order at the `Ready`
//! transition (data inputs coalesce to the latest snapshot, which is all the
//! synchronizer ever reconciles against). Operations after `Disposed` are
//! no-ops, which tolerates UI layers that fire cleanup effects out of order.

use crate::camera::{CameraController, CameraMove, CameraState};
use crate::engine::MapEngine;
use crate::error::{MapError, Result};
use crate::feature::FeatureKey;
use crate::interact::InteractionController;
use crate::layers::{LayerKind, LayerState};
use crate::navigate::SectorNavigator;
use crate::sync::FeatureSynchronizer;
use pelagos_core::config::MapConfig;
use pelagos_core::types::{PfzAdvisory, Sector};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Lifecycle state of a map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Created, no engine yet
    Uninitialized,
    /// Engine handed over, asynchronous load in flight
    Initializing,
    /// Engine loaded; all operations apply immediately
    Ready,
    /// Torn down (or the mount failed); terminal
    Disposed,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Uninitialized => "uninitialized",
            LifecycleState::Initializing => "initializing",
            LifecycleState::Ready => "ready",
            LifecycleState::Disposed => "disposed",
        };
        write!(f, "{name}")
    }
}

/// An operation buffered while the engine loads.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BufferedOp {
    ZoomIn,
    ZoomOut,
    Rotate,
    ResetView,
    SetPitch(f64),
    SetThreeD(bool),
    SelectSector(Sector),
    SetFullscreen(bool),
}

/// Callback invoked after a successful sector fly-to.
pub type SectorSelectCallback = Box<dyn FnMut(Sector) + Send>;

/// Owns the rendering engine and drives the map view.
pub struct MapSurface {
    state: LifecycleState,
    engine: Option<Box<dyn MapEngine>>,
    camera: CameraController,
    synchronizer: FeatureSynchronizer,
    interactions: InteractionController,
    navigator: SectorNavigator,
    /// Latest advisory snapshot; replaced wholesale, never mutated
    advisories: Vec<PfzAdvisory>,
    layers: LayerState,
    buffered: Vec<BufferedOp>,
    on_sector_select: Option<SectorSelectCallback>,
}

impl MapSurface {
    /// Creates an unmounted surface.
    pub fn new(map_config: &MapConfig, navigator: SectorNavigator) -> Self {
        Self {
            state: LifecycleState::Uninitialized,
            engine: None,
            camera: CameraController::new(
                map_config.center(),
                map_config.zoom,
                map_config.min_zoom,
                map_config.max_zoom,
            ),
            synchronizer: FeatureSynchronizer::new(),
            interactions: InteractionController::new(),
            navigator,
            advisories: Vec::new(),
            layers: LayerState::default(),
            buffered: Vec::new(),
            on_sector_select: None,
        }
    }

    /// Registers the callback fired after each successful sector fly-to.
    pub fn on_sector_select(&mut self, callback: SectorSelectCallback) {
        self.on_sector_select = Some(callback);
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Camera state (the settle target of any in-flight animation).
    pub fn camera_state(&self) -> CameraState {
        self.camera.state()
    }

    /// Number of features currently rendered.
    pub fn rendered_feature_count(&self) -> usize {
        self.synchronizer.rendered_count()
    }

    /// Keys of the features currently rendered.
    pub fn rendered_keys(&self) -> Vec<FeatureKey> {
        self.synchronizer.rendered_keys()
    }

    /// Key of the open popup, if any.
    pub fn open_popup_key(&self) -> Option<FeatureKey> {
        self.interactions.active_popup().map(|(key, _)| key.clone())
    }

    /// Mounts the surface on an engine and completes its asynchronous load.
    ///
    /// Transitions `Uninitialized -> Initializing -> Ready`. On load failure
    /// the surface goes straight to `Disposed`: the caller shows a fallback
    /// and may create a fresh surface, but this one never retries.
    ///
    /// # Errors
    ///
    /// [`MapError::InvalidTransition`] if the surface was already mounted or
    /// disposed; [`MapError::EngineInit`] if the engine load fails.
    pub async fn mount(&mut self, mut engine: Box<dyn MapEngine>) -> Result<()> {
        match self.state {
            LifecycleState::Uninitialized => {}
            LifecycleState::Initializing | LifecycleState::Ready => {
                return Err(MapError::InvalidTransition("surface is already mounted"));
            }
            LifecycleState::Disposed => {
                return Err(MapError::InvalidTransition(
                    "surface is disposed; create a new one to remount",
                ));
            }
        }

        self.state = LifecycleState::Initializing;
        debug!("Engine load started");

        if let Err(err) = engine.load().await {
            warn!(error = %err, "Engine load failed, disposing surface");
            self.state = LifecycleState::Disposed;
            self.buffered.clear();
            return Err(MapError::EngineInit(err));
        }

        // Snap the engine camera to the mount pose before anything renders.
        engine.ease_to(self.camera.state(), Duration::ZERO);
        self.engine = Some(engine);
        self.state = LifecycleState::Ready;
        info!("Map surface ready");

        // Replay: reconcile against the latest data snapshot, then the
        // buffered camera operations in issuance order, exactly once.
        self.reconcile();
        let buffered = std::mem::take(&mut self.buffered);
        for op in buffered {
            self.apply(op);
        }

        Ok(())
    }

    /// Tears the surface down: features, popup, then the engine itself.
    ///
    /// Synchronous and idempotent; safe to call in any state, any number of
    /// times. Buffered operations and in-flight animations are discarded.
    pub fn unmount(&mut self) {
        if self.state == LifecycleState::Disposed {
            return;
        }

        if let Some(engine) = self.engine.as_deref_mut() {
            self.synchronizer.clear(engine);
            engine.close_popup();
            self.interactions.reset();
            engine.destroy();
        }

        self.engine = None;
        self.buffered.clear();
        self.state = LifecycleState::Disposed;
        info!("Map surface disposed");
    }

    /// Replaces the advisory snapshot and reconciles rendered features.
    ///
    /// Before `Ready` the snapshot is retained for the replay at the `Ready`
    /// transition; intermediate snapshots are skipped (last value wins).
    pub fn set_advisories(&mut self, advisories: Vec<PfzAdvisory>) {
        if self.state == LifecycleState::Disposed {
            return;
        }
        self.advisories = advisories;
        if self.state == LifecycleState::Ready {
            self.reconcile();
        }
    }

    /// Toggles a layer and reconciles rendered features.
    pub fn set_layer_visible(&mut self, layer: LayerKind, visible: bool) {
        if self.state == LifecycleState::Disposed {
            return;
        }
        self.layers.set_visible(layer, visible);
        if self.state == LifecycleState::Ready {
            self.reconcile();
        }
    }

    /// Returns the visibility of a layer.
    pub fn layer_visible(&self, layer: LayerKind) -> bool {
        self.layers.is_visible(layer)
    }

    pub fn zoom_in(&mut self) {
        self.enqueue(BufferedOp::ZoomIn);
    }

    pub fn zoom_out(&mut self) {
        self.enqueue(BufferedOp::ZoomOut);
    }

    pub fn rotate(&mut self) {
        self.enqueue(BufferedOp::Rotate);
    }

    pub fn reset_view(&mut self) {
        self.enqueue(BufferedOp::ResetView);
    }

    pub fn set_pitch(&mut self, pitch: f64) {
        self.enqueue(BufferedOp::SetPitch(pitch));
    }

    pub fn set_three_d(&mut self, enabled: bool) {
        self.enqueue(BufferedOp::SetThreeD(enabled));
    }

    /// Flies to a sector's camera preset and fires the selection callback.
    ///
    /// A sector without a preset is a silent no-op: no camera move, no
    /// callback.
    pub fn select_sector(&mut self, sector: Sector) {
        self.enqueue(BufferedOp::SelectSector(sector));
    }

    /// Requests fullscreen. Engines without the capability log and no-op.
    pub fn set_fullscreen(&mut self, enabled: bool) {
        self.enqueue(BufferedOp::SetFullscreen(enabled));
    }

    /// Pointer entered the feature with this key.
    pub fn hover_enter(&mut self, key: &FeatureKey) {
        if self.state != LifecycleState::Ready {
            return;
        }
        let Some(feature) = self.synchronizer.feature(key).cloned() else {
            return;
        };
        if let Some(engine) = self.engine.as_deref_mut() {
            self.interactions.hover_enter(&feature, engine);
        }
    }

    /// Pointer left the hovered feature.
    pub fn hover_leave(&mut self) {
        if self.state != LifecycleState::Ready {
            return;
        }
        if let Some(engine) = self.engine.as_deref_mut() {
            self.interactions.hover_leave(engine);
        }
    }

    /// The feature with this key was clicked.
    pub fn click(&mut self, key: &FeatureKey) {
        if self.state != LifecycleState::Ready {
            return;
        }
        let Some(feature) = self.synchronizer.feature(key).cloned() else {
            return;
        };
        if let Some(engine) = self.engine.as_deref_mut() {
            self.interactions.click(&feature, engine);
        }
    }

    /// The map background was clicked.
    pub fn background_click(&mut self) {
        if self.state != LifecycleState::Ready {
            return;
        }
        if let Some(engine) = self.engine.as_deref_mut() {
            self.interactions.background_click(engine);
        }
    }

    /// Routes an operation by lifecycle state: apply when `Ready`, buffer
    /// while mounting, drop after disposal.
    fn enqueue(&mut self, op: BufferedOp) {
        match self.state {
            LifecycleState::Disposed => {}
            LifecycleState::Ready => self.apply(op),
            LifecycleState::Uninitialized | LifecycleState::Initializing => {
                self.buffered.push(op);
            }
        }
    }

    fn apply(&mut self, op: BufferedOp) {
        let mv = match op {
            BufferedOp::ZoomIn => self.camera.zoom_in(),
            BufferedOp::ZoomOut => self.camera.zoom_out(),
            BufferedOp::Rotate => Some(self.camera.rotate()),
            BufferedOp::ResetView => Some(self.camera.reset()),
            BufferedOp::SetPitch(pitch) => self.camera.set_pitch(pitch),
            BufferedOp::SetThreeD(enabled) => self.camera.set_three_d(enabled),
            BufferedOp::SelectSector(sector) => {
                self.fly_to_sector(sector);
                None
            }
            BufferedOp::SetFullscreen(enabled) => {
                self.apply_fullscreen(enabled);
                None
            }
        };

        if let Some(CameraMove { target, duration }) = mv {
            if let Some(engine) = self.engine.as_deref_mut() {
                engine.ease_to(target, duration);
            }
        }
    }

    fn fly_to_sector(&mut self, sector: Sector) {
        let Some(preset) = self.navigator.resolve(sector) else {
            return;
        };
        let CameraMove { target, duration } = self.camera.fly_to(preset);
        if let Some(engine) = self.engine.as_deref_mut() {
            engine.ease_to(target, duration);
        }
        debug!(%sector, "Sector selected");
        if let Some(callback) = self.on_sector_select.as_mut() {
            callback(sector);
        }
    }

    fn apply_fullscreen(&mut self, enabled: bool) {
        let Some(engine) = self.engine.as_deref_mut() else {
            return;
        };
        if !engine.supports_fullscreen() {
            debug!("Fullscreen unsupported by engine, ignoring request");
            return;
        }
        if let Err(err) = engine.set_fullscreen(enabled) {
            debug!(error = %err, "Fullscreen request failed, ignoring");
        }
    }

    /// One reconciliation pass, plus popup-feature coupling: a popup whose
    /// feature was removed closes in the same pass.
    fn reconcile(&mut self) {
        let Some(engine) = self.engine.as_deref_mut() else {
            return;
        };
        let outcome = self
            .synchronizer
            .synchronize(&self.advisories, &self.layers, engine);
        for key in &outcome.removed {
            self.interactions.feature_removed(key, engine);
        }
    }
}

impl fmt::Debug for MapSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapSurface")
            .field("state", &self.state)
            .field("rendered", &self.synchronizer.rendered_count())
            .field("buffered", &self.buffered.len())
            .finish()
    }
}
