//! Pointer-driven popup state.
//!
//! Translates hover and click events on rendered features into popup
//! transitions while holding the invariant that at most one popup exists.
//! Hover produces a transient preview; click pins the popup so it survives
//! hover-leave and only goes away on another click or a background click.

use crate::engine::{MapEngine, Popup};
use crate::feature::{Feature, FeatureKey};
use tracing::trace;

/// How the active popup was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupMode {
    /// Opened by hover; closes on hover-leave
    Transient,
    /// Pinned by click; survives hover-leave
    Pinned,
}

#[derive(Debug, Clone)]
struct ActivePopup {
    key: FeatureKey,
    mode: PopupMode,
}

/// Maintains the single-active-popup invariant over pointer events.
#[derive(Debug, Default)]
pub struct InteractionController {
    active: Option<ActivePopup>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key and mode of the active popup, if one is open.
    pub fn active_popup(&self) -> Option<(&FeatureKey, PopupMode)> {
        self.active.as_ref().map(|p| (&p.key, p.mode))
    }

    /// Pointer entered a feature: open a transient preview.
    ///
    /// A pinned popup is left alone; it only yields to a click.
    pub fn hover_enter(&mut self, feature: &Feature, engine: &mut dyn MapEngine) {
        if matches!(self.active, Some(ActivePopup { mode: PopupMode::Pinned, .. })) {
            return;
        }
        self.open(feature, PopupMode::Transient, engine);
    }

    /// Pointer left the hovered feature: close a transient preview.
    pub fn hover_leave(&mut self, engine: &mut dyn MapEngine) {
        if matches!(self.active, Some(ActivePopup { mode: PopupMode::Transient, .. })) {
            self.close(engine);
        }
    }

    /// Feature clicked: pin the popup.
    ///
    /// Clicking the feature whose popup is already pinned dismisses it;
    /// clicking a different feature moves the pin there.
    pub fn click(&mut self, feature: &Feature, engine: &mut dyn MapEngine) {
        if let Some(active) = &self.active {
            if active.mode == PopupMode::Pinned && active.key == feature.key {
                self.close(engine);
                return;
            }
        }
        self.open(feature, PopupMode::Pinned, engine);
    }

    /// Click on the map background: dismiss whatever popup is open.
    pub fn background_click(&mut self, engine: &mut dyn MapEngine) {
        self.close(engine);
    }

    /// A reconciliation pass removed this feature: a popup may never outlive
    /// the feature it is anchored to.
    pub fn feature_removed(&mut self, key: &FeatureKey, engine: &mut dyn MapEngine) {
        if self.active.as_ref().is_some_and(|p| &p.key == key) {
            trace!(key = %key, "Closing popup for removed feature");
            self.close(engine);
        }
    }

    /// Drops popup state without touching the engine. Used at teardown, where
    /// the engine releases its popup slot itself.
    pub fn reset(&mut self) {
        self.active = None;
    }

    fn open(&mut self, feature: &Feature, mode: PopupMode, engine: &mut dyn MapEngine) {
        // Close-before-open keeps the at-most-one invariant inside this
        // controller instead of trusting the engine's popup slot.
        engine.close_popup();
        engine.show_popup(Popup {
            key: feature.key.clone(),
            content: popup_content(feature),
            anchor: feature.point,
        });
        self.active = Some(ActivePopup {
            key: feature.key.clone(),
            mode,
        });
    }

    fn close(&mut self, engine: &mut dyn MapEngine) {
        if self.active.take().is_some() {
            engine.close_popup();
        }
    }
}

/// Renders the popup body for a zone feature.
fn popup_content(feature: &Feature) -> String {
    let p = &feature.properties;
    format!(
        "PFZ Zone\nSector: {}\nSST: {:.1}\u{00b0}C\nDepth: {:.0}m\nSpecies: {}",
        p.sector, p.sst, p.depth, p.species
    )
}
