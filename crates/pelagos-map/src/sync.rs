//! Key-based reconciliation of rendered features.
//!
//! The synchronizer converts the latest `(advisories, layers)` input into a
//! target feature set and diffs it against what the engine currently renders.
//! Keys in the target but not rendered are created, rendered keys that left
//! the target are removed, and keys present on both sides are updated in
//! place (replaced under the same key if the zone moved) so the primitive
//! and any popup anchored to it survive.

use crate::engine::MapEngine;
use crate::feature::{Feature, FeatureKey, FeatureProperties};
use crate::layers::{LayerKind, LayerState};
use pelagos_core::types::PfzAdvisory;
use pelagos_core::validate::validate_coordinates;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Number of species names carried into feature properties.
const SPECIES_LABEL_LIMIT: usize = 3;

/// Result of one reconciliation pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub created: usize,
    pub updated: usize,
    /// Keys removed this pass; the surface closes any popup anchored to one
    pub removed: Vec<FeatureKey>,
    /// Zones skipped for invalid coordinates
    pub skipped: usize,
}

impl SyncOutcome {
    /// Returns true if the pass changed nothing on the engine.
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.updated == 0 && self.removed.is_empty()
    }
}

/// Reconciles rendered features with the advisory snapshot.
#[derive(Debug, Default)]
pub struct FeatureSynchronizer {
    /// Features currently rendered, by key
    current: HashMap<FeatureKey, Feature>,
}

impl FeatureSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys of the features currently rendered.
    pub fn rendered_keys(&self) -> Vec<FeatureKey> {
        self.current.keys().cloned().collect()
    }

    /// The rendered feature for a key, if any.
    pub fn feature(&self, key: &FeatureKey) -> Option<&Feature> {
        self.current.get(key)
    }

    /// Number of features currently rendered.
    pub fn rendered_count(&self) -> usize {
        self.current.len()
    }

    /// Runs one reconciliation pass against the engine.
    ///
    /// Idempotent: a second pass with the same input is a no-op. Zones with
    /// out-of-range coordinates are skipped and logged, never fatal.
    pub fn synchronize(
        &mut self,
        advisories: &[PfzAdvisory],
        layers: &LayerState,
        engine: &mut dyn MapEngine,
    ) -> SyncOutcome {
        let mut target = HashMap::new();
        let mut outcome = SyncOutcome::default();

        if layers.is_visible(LayerKind::Pfz) {
            for advisory in advisories {
                for zone in &advisory.zones {
                    if let Err(err) = validate_coordinates(&zone.coordinates) {
                        warn!(
                            advisory = %advisory.id,
                            zone = %zone.id,
                            error = %err,
                            "Skipping zone with invalid coordinates"
                        );
                        outcome.skipped += 1;
                        continue;
                    }

                    let key = FeatureKey::new(&advisory.id, &zone.id);
                    target.insert(
                        key.clone(),
                        Feature {
                            key,
                            point: zone.coordinates,
                            properties: FeatureProperties {
                                sector: advisory.sector.display_name().to_string(),
                                sst: zone.sst.unwrap_or(0.0),
                                depth: zone.depth.unwrap_or(0.0),
                                species: advisory.species_summary(SPECIES_LABEL_LIMIT),
                            },
                        },
                    );
                }
            }
        }

        // Removals first so an add of a recycled key never races a stale
        // removal of the same key.
        let stale: Vec<FeatureKey> = self
            .current
            .keys()
            .filter(|key| !target.contains_key(*key))
            .cloned()
            .collect();
        for key in stale {
            if let Err(err) = engine.remove_feature(&key) {
                warn!(key = %key, error = %err, "Engine refused feature removal");
            }
            self.current.remove(&key);
            outcome.removed.push(key);
        }

        for (key, feature) in target {
            match self.current.get(&key) {
                None => {
                    engine.add_feature(feature.clone());
                    self.current.insert(key, feature);
                    outcome.created += 1;
                }
                Some(existing) if existing.point != feature.point => {
                    // A zone that moved keeps its key; re-adding replaces the
                    // primitive in place so the new anchor takes effect.
                    engine.add_feature(feature.clone());
                    self.current.insert(key, feature);
                    outcome.updated += 1;
                }
                Some(existing) if existing.properties != feature.properties => {
                    if let Err(err) = engine.update_feature(&key, feature.properties.clone()) {
                        warn!(key = %key, error = %err, "Engine refused feature update");
                    }
                    self.current.insert(key, feature);
                    outcome.updated += 1;
                }
                Some(_) => {}
            }
        }

        debug!(
            created = outcome.created,
            updated = outcome.updated,
            removed = outcome.removed.len(),
            skipped = outcome.skipped,
            rendered = self.current.len(),
            "Feature reconciliation pass complete"
        );

        outcome
    }

    /// Removes every rendered feature from the engine. Used at teardown.
    pub fn clear(&mut self, engine: &mut dyn MapEngine) -> Vec<FeatureKey> {
        let keys: Vec<FeatureKey> = self.current.keys().cloned().collect();
        for key in &keys {
            if let Err(err) = engine.remove_feature(key) {
                warn!(key = %key, error = %err, "Engine refused feature removal");
            }
        }
        self.current.clear();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessEngine;
    use chrono::{TimeZone, Utc};
    use pelagos_core::types::{
        Coordinates, DataSource, FishSpecies, PfzAdvisory, PfzZone, Sector,
    };

    fn zone(id: &str, lat: f64, lon: f64) -> PfzZone {
        PfzZone {
            id: id.to_string(),
            coordinates: Coordinates::new(lat, lon),
            bounding_box: None,
            depth: Some(50.0),
            distance_from_shore: Some(25.0),
            sst: Some(28.5),
            chlorophyll: Some(0.8),
        }
    }

    fn advisory(id: &str, sector: Sector, zones: Vec<PfzZone>) -> PfzAdvisory {
        PfzAdvisory {
            id: id.to_string(),
            sector,
            forecast_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            valid_from: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            valid_upto: Utc.with_ymd_and_hms(2025, 6, 3, 0, 0, 0).unwrap(),
            zones,
            fish_species: vec![
                FishSpecies::named("Sardine"),
                FishSpecies::named("Mackerel"),
            ],
            remarks: None,
            data_source: DataSource::Incois,
            last_updated: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    fn engine() -> HeadlessEngine {
        HeadlessEngine::new(Coordinates::new(15.0, 78.0), 5.0)
    }

    #[test]
    fn test_initial_load_creates_features() {
        let mut engine = engine();
        let mut sync = FeatureSynchronizer::new();
        let advisories = vec![advisory(
            "pfz-kerala-001",
            Sector::Kerala,
            vec![zone("zone-1", 9.5, 75.8), zone("zone-2", 10.2, 75.5)],
        )];

        let outcome = sync.synchronize(&advisories, &LayerState::default(), &mut engine);
        assert_eq!(outcome.created, 2);
        assert_eq!(engine.feature_count(), 2);
        assert!(engine
            .feature(&FeatureKey::new("pfz-kerala-001", "zone-1"))
            .is_some());
        assert!(engine
            .feature(&FeatureKey::new("pfz-kerala-001", "zone-2"))
            .is_some());
    }

    #[test]
    fn test_reconciliation_is_idempotent() {
        let mut engine = engine();
        let mut sync = FeatureSynchronizer::new();
        let advisories = vec![advisory(
            "pfz-kerala-001",
            Sector::Kerala,
            vec![zone("zone-1", 9.5, 75.8)],
        )];
        let layers = LayerState::default();

        sync.synchronize(&advisories, &layers, &mut engine);
        let keys_after_first = {
            let mut k = sync.rendered_keys();
            k.sort_by(|a, b| a.as_str().cmp(b.as_str()));
            k
        };

        let outcome = sync.synchronize(&advisories, &layers, &mut engine);
        assert!(outcome.is_noop());
        let mut keys_after_second = sync.rendered_keys();
        keys_after_second.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(keys_after_first, keys_after_second);
        assert_eq!(engine.feature_count(), 1);
    }

    #[test]
    fn test_out_of_range_zone_skipped() {
        let mut engine = engine();
        let mut sync = FeatureSynchronizer::new();
        let advisories = vec![advisory(
            "pfz-kerala-001",
            Sector::Kerala,
            vec![zone("zone-1", 200.0, 75.8), zone("zone-2", 10.2, 75.5)],
        )];

        let outcome = sync.synchronize(&advisories, &LayerState::default(), &mut engine);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.created, 1);
        assert_eq!(engine.feature_count(), 1);
        assert!(engine
            .feature(&FeatureKey::new("pfz-kerala-001", "zone-2"))
            .is_some());
    }

    #[test]
    fn test_layer_toggle_roundtrip() {
        let mut engine = engine();
        let mut sync = FeatureSynchronizer::new();
        let advisories = vec![advisory(
            "pfz-kerala-001",
            Sector::Kerala,
            vec![zone("zone-1", 9.5, 75.8), zone("zone-2", 10.2, 75.5)],
        )];
        let mut layers = LayerState::default();

        sync.synchronize(&advisories, &layers, &mut engine);
        let mut expected = sync.rendered_keys();
        expected.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        layers.set_visible(LayerKind::Pfz, false);
        let outcome = sync.synchronize(&advisories, &layers, &mut engine);
        assert_eq!(outcome.removed.len(), 2);
        assert_eq!(engine.feature_count(), 0);

        layers.set_visible(LayerKind::Pfz, true);
        sync.synchronize(&advisories, &layers, &mut engine);
        let mut restored = sync.rendered_keys();
        restored.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(expected, restored);
    }

    #[test]
    fn test_reshow_uses_latest_snapshot() {
        let mut engine = engine();
        let mut sync = FeatureSynchronizer::new();
        let mut layers = LayerState::default();

        let before = vec![advisory(
            "pfz-kerala-001",
            Sector::Kerala,
            vec![zone("zone-1", 9.5, 75.8)],
        )];
        sync.synchronize(&before, &layers, &mut engine);

        layers.set_visible(LayerKind::Pfz, false);
        sync.synchronize(&before, &layers, &mut engine);

        // Data changed while the layer was hidden
        let after = vec![advisory(
            "pfz-tamil-nadu-001",
            Sector::TamilNadu,
            vec![zone("zone-1", 11.5, 80.2)],
        )];
        layers.set_visible(LayerKind::Pfz, true);
        sync.synchronize(&after, &layers, &mut engine);

        assert_eq!(engine.feature_count(), 1);
        assert!(engine
            .feature(&FeatureKey::new("pfz-tamil-nadu-001", "zone-1"))
            .is_some());
    }

    #[test]
    fn test_property_change_updates_in_place() {
        let mut engine = engine();
        let mut sync = FeatureSynchronizer::new();
        let layers = LayerState::default();

        let mut advisories = vec![advisory(
            "pfz-kerala-001",
            Sector::Kerala,
            vec![zone("zone-1", 9.5, 75.8)],
        )];
        sync.synchronize(&advisories, &layers, &mut engine);

        advisories[0].zones[0].sst = Some(29.4);
        let outcome = sync.synchronize(&advisories, &layers, &mut engine);
        assert_eq!(outcome.created, 0);
        assert_eq!(outcome.updated, 1);
        assert!(outcome.removed.is_empty());

        let key = FeatureKey::new("pfz-kerala-001", "zone-1");
        assert_eq!(engine.feature(&key).unwrap().properties.sst, 29.4);
    }

    #[test]
    fn test_moved_zone_tracks_new_point() {
        let mut engine = engine();
        let mut sync = FeatureSynchronizer::new();
        let layers = LayerState::default();

        let mut advisories = vec![advisory(
            "pfz-kerala-001",
            Sector::Kerala,
            vec![zone("zone-1", 9.5, 75.8)],
        )];
        sync.synchronize(&advisories, &layers, &mut engine);

        // Same zone id, new position in the next snapshot
        advisories[0].zones[0].coordinates = Coordinates::new(9.9, 75.6);
        let outcome = sync.synchronize(&advisories, &layers, &mut engine);
        assert_eq!(outcome.created, 0);
        assert_eq!(outcome.updated, 1);
        assert!(outcome.removed.is_empty());

        let key = FeatureKey::new("pfz-kerala-001", "zone-1");
        assert_eq!(
            engine.feature(&key).unwrap().point,
            Coordinates::new(9.9, 75.6)
        );
        assert_eq!(engine.feature_count(), 1);
    }

    #[test]
    fn test_advisory_with_no_zones_contributes_nothing() {
        let mut engine = engine();
        let mut sync = FeatureSynchronizer::new();
        let advisories = vec![advisory("pfz-goa-001", Sector::Goa, vec![])];
        let outcome = sync.synchronize(&advisories, &LayerState::default(), &mut engine);
        assert!(outcome.is_noop());
        assert_eq!(engine.feature_count(), 0);
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut engine = engine();
        let mut sync = FeatureSynchronizer::new();
        let advisories = vec![advisory(
            "pfz-kerala-001",
            Sector::Kerala,
            vec![zone("zone-1", 9.5, 75.8), zone("zone-2", 10.2, 75.5)],
        )];
        sync.synchronize(&advisories, &LayerState::default(), &mut engine);

        let removed = sync.clear(&mut engine);
        assert_eq!(removed.len(), 2);
        assert_eq!(engine.feature_count(), 0);
        assert_eq!(sync.rendered_count(), 0);
    }
}
