//! Error types for the map view.

use crate::engine::EngineError;
use thiserror::Error;

/// Result type alias using MapError as the error type.
pub type Result<T> = std::result::Result<T, MapError>;

/// Errors surfaced by the map view.
///
/// Initialization failures are terminal for the mount: the owning UI shows a
/// fallback and may remount manually, but the surface never retries on its
/// own. Per-feature problems (bad coordinates) never reach this type; they are
/// logged and skipped inside the synchronizer.
#[derive(Debug, Error)]
pub enum MapError {
    /// The engine could not be constructed or failed its asynchronous load.
    #[error("Engine initialization failed: {0}")]
    EngineInit(#[source] EngineError),

    /// An operation was issued in a lifecycle state that forbids it.
    ///
    /// Only `mount` raises this (mounting twice, or mounting a disposed
    /// surface); every other operation degrades to a no-op instead.
    #[error("Invalid lifecycle transition: {0}")]
    InvalidTransition(&'static str),
}
