//! The rendering-engine seam.
//!
//! Everything the map view needs from a retained-mode engine is expressed
//! through [`MapEngine`]. The surface owns exactly one boxed engine for its
//! mounted lifetime and hands mutable access to its sub-components only
//! between ready and disposal.

use crate::camera::CameraState;
use crate::feature::{Feature, FeatureKey, FeatureProperties};
use async_trait::async_trait;
use pelagos_core::types::Coordinates;
use std::time::Duration;
use thiserror::Error;

/// Errors reported by a rendering engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Engine construction failed or its container is detached
    #[error("Engine failed to initialize: {reason}")]
    InitFailed { reason: String },

    /// An operation referenced a feature the engine does not hold
    #[error("Unknown feature: {key}")]
    UnknownFeature { key: String },

    /// Fullscreen was requested but the environment cannot provide it
    #[error("Fullscreen is not supported by this engine")]
    FullscreenUnsupported,
}

/// A popup anchored to a rendered feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    /// Key of the feature the popup is anchored to
    pub key: FeatureKey,
    /// Rendered popup body
    pub content: String,
    /// Anchor position
    pub anchor: Coordinates,
}

/// Imperative surface of a retained-mode map engine.
///
/// Implementations retain features, at most one popup, and a camera. All
/// methods are synchronous except [`load`](MapEngine::load), which models the
/// engine's asynchronous startup; callers must not touch features or the
/// camera until `load` has resolved.
#[async_trait]
pub trait MapEngine: Send {
    /// Completes the engine's asynchronous initialization.
    ///
    /// Resolves once the engine is ready to accept features and camera moves.
    /// A failed load is terminal: the engine must be discarded, not retried.
    async fn load(&mut self) -> std::result::Result<(), EngineError>;

    /// Adds a feature. Adding a key the engine already holds replaces it.
    fn add_feature(&mut self, feature: Feature);

    /// Updates the properties of a retained feature in place.
    ///
    /// In-place update keeps the rendered primitive alive, avoiding flicker
    /// and preserving any popup anchored to the key.
    fn update_feature(
        &mut self,
        key: &FeatureKey,
        properties: FeatureProperties,
    ) -> std::result::Result<(), EngineError>;

    /// Removes a feature. Removing an unknown key is an error.
    fn remove_feature(&mut self, key: &FeatureKey) -> std::result::Result<(), EngineError>;

    /// Number of features currently retained.
    fn feature_count(&self) -> usize;

    /// Shows a popup, replacing any popup already shown.
    fn show_popup(&mut self, popup: Popup);

    /// Closes the popup if one is shown.
    fn close_popup(&mut self);

    /// The popup currently shown, if any.
    fn popup(&self) -> Option<&Popup>;

    /// Starts an animated camera move toward `target`.
    ///
    /// A move issued while another is in flight retargets the animation; moves
    /// do not queue (last write wins).
    fn ease_to(&mut self, target: CameraState, duration: Duration);

    /// Camera state once the current animation settles.
    fn camera(&self) -> CameraState;

    /// Whether the engine's environment can enter fullscreen.
    fn supports_fullscreen(&self) -> bool {
        false
    }

    /// Enters or leaves fullscreen.
    fn set_fullscreen(&mut self, _enabled: bool) -> std::result::Result<(), EngineError> {
        Err(EngineError::FullscreenUnsupported)
    }

    /// Releases every retained resource: features, popup, listeners, and the
    /// engine instance itself. Must be safe to call more than once.
    fn destroy(&mut self);
}
