//! Interactive map view for the Pelagos marine-data platform.
//!
//! This crate bridges the reactive advisory snapshots coming out of the feed
//! layer onto an imperative, retained-mode map engine. The bridge is built
//! from five pieces:
//!
//! - [`MapSurface`] owns the engine instance and its lifecycle state machine
//!   (`Uninitialized -> Initializing -> Ready -> Disposed`), buffering
//!   operations issued before the engine reports ready and making teardown
//!   idempotent.
//! - [`FeatureSynchronizer`] reconciles rendered point features against the
//!   latest `(advisories, layers)` input using key-based diffing.
//! - [`InteractionController`] turns pointer events on features into popup
//!   state, holding the at-most-one-popup invariant.
//! - [`CameraController`] exposes camera operations as pure transitions over
//!   [`CameraState`], each producing an animated move.
//! - [`SectorNavigator`] resolves sector identifiers to camera presets for
//!   quick navigation.
//!
//! The engine itself sits behind the [`MapEngine`] trait; [`HeadlessEngine`]
//! is the in-process implementation used by the demo binary and the tests.

pub mod camera;
pub mod engine;
pub mod error;
pub mod feature;
pub mod headless;
pub mod interact;
pub mod layers;
pub mod navigate;
pub mod surface;
pub mod sync;

pub use camera::{CameraController, CameraMove, CameraState};
pub use engine::{EngineError, MapEngine, Popup};
pub use error::{MapError, Result};
pub use feature::{Feature, FeatureKey, FeatureProperties};
pub use headless::HeadlessEngine;
pub use interact::{InteractionController, PopupMode};
pub use layers::{LayerKind, LayerState};
pub use navigate::SectorNavigator;
pub use surface::{LifecycleState, MapSurface};
pub use sync::{FeatureSynchronizer, SyncOutcome};
