//! Camera state and deterministic camera operations.

use pelagos_core::types::{CameraPreset, Coordinates};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Duration of short camera eases (pitch, rotate).
pub const EASE_DURATION: Duration = Duration::from_millis(300);

/// Duration of long camera moves (reset, sector fly-to).
pub const FLY_DURATION: Duration = Duration::from_millis(800);

/// Pitch applied by `reset` while 3-D mode is enabled.
const DEFAULT_3D_PITCH: f64 = 50.0;

/// Maximum supported pitch in degrees.
const MAX_PITCH: f64 = 85.0;

/// Full viewport state of the map camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub center: Coordinates,
    pub zoom: f64,
    /// Bearing in degrees, [0, 360)
    pub bearing: f64,
    /// Pitch in degrees, [0, 85]
    pub pitch: f64,
}

impl CameraState {
    pub fn new(center: Coordinates, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            bearing: 0.0,
            pitch: 0.0,
        }
    }
}

/// An animated camera transition produced by a controller operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMove {
    pub target: CameraState,
    pub duration: Duration,
}

/// Owns viewport state and exposes camera operations as pure transitions.
///
/// The controller never talks to the engine itself; each operation returns the
/// [`CameraMove`] the surface forwards to the engine. Operations that would
/// not change the camera return `None` so callers can skip the engine call.
#[derive(Debug, Clone)]
pub struct CameraController {
    state: CameraState,
    /// Mount-time pose restored by `reset`
    initial_center: Coordinates,
    initial_zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    three_d: bool,
    /// Last pitch the user chose, preserved while 3-D mode is off
    chosen_pitch: f64,
}

impl CameraController {
    /// Creates a controller at the mount pose with 3-D mode enabled.
    pub fn new(center: Coordinates, zoom: f64, min_zoom: f64, max_zoom: f64) -> Self {
        let chosen_pitch = DEFAULT_3D_PITCH;
        Self {
            state: CameraState {
                center,
                zoom,
                bearing: 0.0,
                pitch: chosen_pitch,
            },
            initial_center: center,
            initial_zoom: zoom,
            min_zoom,
            max_zoom,
            three_d: true,
            chosen_pitch,
        }
    }

    /// Current camera state (the settle target of any in-flight animation).
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Whether 3-D mode is enabled.
    pub fn is_three_d(&self) -> bool {
        self.three_d
    }

    /// The pitch the user last chose, independent of 3-D mode.
    pub fn chosen_pitch(&self) -> f64 {
        self.chosen_pitch
    }

    /// Zooms in one level, clamped to the supported range.
    ///
    /// Returns `None` at the upper bound (a no-op, not an error).
    pub fn zoom_in(&mut self) -> Option<CameraMove> {
        self.zoom_by(1.0)
    }

    /// Zooms out one level, clamped to the supported range.
    pub fn zoom_out(&mut self) -> Option<CameraMove> {
        self.zoom_by(-1.0)
    }

    fn zoom_by(&mut self, delta: f64) -> Option<CameraMove> {
        let target = (self.state.zoom + delta).clamp(self.min_zoom, self.max_zoom);
        if target == self.state.zoom {
            return None;
        }
        self.state.zoom = target;
        Some(self.ease(EASE_DURATION))
    }

    /// Sets the pitch, clamped to [0, 85].
    ///
    /// The chosen value is always recorded; the rendered pitch only follows it
    /// while 3-D mode is enabled.
    pub fn set_pitch(&mut self, pitch: f64) -> Option<CameraMove> {
        self.chosen_pitch = pitch.clamp(0.0, MAX_PITCH);
        if !self.three_d {
            return None;
        }
        if self.state.pitch == self.chosen_pitch {
            return None;
        }
        self.state.pitch = self.chosen_pitch;
        Some(self.ease(EASE_DURATION))
    }

    /// Enables or disables 3-D mode.
    ///
    /// Disabling forces the rendered pitch to 0 while keeping the user's last
    /// chosen pitch for when 3-D is re-enabled.
    pub fn set_three_d(&mut self, enabled: bool) -> Option<CameraMove> {
        if self.three_d == enabled {
            return None;
        }
        self.three_d = enabled;
        let pitch = if enabled { self.chosen_pitch } else { 0.0 };
        if self.state.pitch == pitch {
            return None;
        }
        self.state.pitch = pitch;
        Some(self.ease(EASE_DURATION))
    }

    /// Rotates the bearing by 45 degrees, modulo 360.
    pub fn rotate(&mut self) -> CameraMove {
        self.state.bearing = (self.state.bearing + 45.0) % 360.0;
        self.ease(EASE_DURATION)
    }

    /// Animates back to the mount pose: initial center/zoom, bearing 0,
    /// pitch 50 when 3-D is enabled and 0 otherwise.
    pub fn reset(&mut self) -> CameraMove {
        self.state = CameraState {
            center: self.initial_center,
            zoom: self.initial_zoom,
            bearing: 0.0,
            pitch: if self.three_d { DEFAULT_3D_PITCH } else { 0.0 },
        };
        self.ease(FLY_DURATION)
    }

    /// Animates center and zoom to a sector preset. Bearing and pitch are
    /// left as they are.
    pub fn fly_to(&mut self, preset: CameraPreset) -> CameraMove {
        self.state.center = preset.center;
        self.state.zoom = preset.zoom.clamp(self.min_zoom, self.max_zoom);
        self.ease(FLY_DURATION)
    }

    fn ease(&self, duration: Duration) -> CameraMove {
        CameraMove {
            target: self.state,
            duration,
        }
    }
}
