//! End-to-end lifecycle tests for the map surface.
//!
//! These drive the surface the way the owning UI does: mount, push advisory
//! snapshots, toggle layers, send pointer events, navigate sectors, unmount.

use chrono::{TimeZone, Utc};
use pelagos_core::config::{sector_presets, MapConfig};
use pelagos_core::types::{
    Coordinates, DataSource, FishSpecies, PfzAdvisory, PfzZone, Sector,
};
use pelagos_map::{
    FeatureKey, HeadlessEngine, LayerKind, LifecycleState, MapError, MapSurface, SectorNavigator,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

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
        fish_species: vec![FishSpecies::named("Sardine"), FishSpecies::named("Mackerel")],
        remarks: None,
        data_source: DataSource::Incois,
        last_updated: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    }
}

fn surface() -> MapSurface {
    MapSurface::new(
        &MapConfig::default(),
        SectorNavigator::new(sector_presets()),
    )
}

fn engine() -> Box<HeadlessEngine> {
    Box::new(HeadlessEngine::new(Coordinates::new(15.0, 78.0), 5.0))
}

fn sorted_keys(surface: &MapSurface) -> Vec<String> {
    let mut keys: Vec<String> = surface
        .rendered_keys()
        .iter()
        .map(|k| k.to_string())
        .collect();
    keys.sort();
    keys
}

#[tokio::test]
async fn test_initial_load_renders_zone_features() {
    let mut surface = surface();
    surface.set_advisories(vec![advisory(
        "pfz-kerala-001",
        Sector::Kerala,
        vec![zone("zone-1", 9.5, 75.8), zone("zone-2", 10.2, 75.5)],
    )]);

    // Snapshot arrived before the engine: buffered, replayed at Ready
    assert_eq!(surface.rendered_feature_count(), 0);
    surface.mount(engine()).await.unwrap();

    assert_eq!(surface.state(), LifecycleState::Ready);
    assert_eq!(
        sorted_keys(&surface),
        vec![
            "pfz-kerala-001:zone-1".to_string(),
            "pfz-kerala-001:zone-2".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_buffered_camera_ops_replay_in_order() {
    let mut surface = surface();
    surface.zoom_in();
    surface.zoom_in();
    surface.rotate();
    assert_eq!(surface.camera_state().zoom, 5.0, "no-ops before Ready");

    surface.mount(engine()).await.unwrap();
    let camera = surface.camera_state();
    assert_eq!(camera.zoom, 7.0);
    assert_eq!(camera.bearing, 45.0);
}

#[tokio::test]
async fn test_engine_init_failure_is_terminal() {
    let mut surface = surface();
    let failing = Box::new(HeadlessEngine::failing(Coordinates::new(15.0, 78.0), 5.0));

    let err = surface.mount(failing).await.unwrap_err();
    assert!(matches!(err, MapError::EngineInit(_)));
    assert_eq!(surface.state(), LifecycleState::Disposed);

    // No automatic retry: a second mount on the same surface is refused
    assert!(matches!(
        surface.mount(engine()).await,
        Err(MapError::InvalidTransition(_))
    ));
}

#[tokio::test]
async fn test_layer_toggle_roundtrip() {
    let mut surface = surface();
    surface.set_advisories(vec![advisory(
        "pfz-kerala-001",
        Sector::Kerala,
        vec![zone("zone-1", 9.5, 75.8), zone("zone-2", 10.2, 75.5)],
    )]);
    surface.mount(engine()).await.unwrap();
    let expected = sorted_keys(&surface);

    surface.set_layer_visible(LayerKind::Pfz, false);
    assert_eq!(surface.rendered_feature_count(), 0);

    surface.set_layer_visible(LayerKind::Pfz, true);
    assert_eq!(sorted_keys(&surface), expected);
}

#[tokio::test]
async fn test_snapshot_replacement_drops_stale_features() {
    let mut surface = surface();
    surface.mount(engine()).await.unwrap();

    surface.set_advisories(vec![
        advisory("pfz-kerala-001", Sector::Kerala, vec![zone("zone-1", 9.5, 75.8)]),
        advisory("pfz-gujarat-001", Sector::Gujarat, vec![zone("zone-1", 21.2, 69.8)]),
    ]);
    assert_eq!(surface.rendered_feature_count(), 2);

    surface.set_advisories(vec![advisory(
        "pfz-gujarat-001",
        Sector::Gujarat,
        vec![zone("zone-1", 21.2, 69.8)],
    )]);
    assert_eq!(
        sorted_keys(&surface),
        vec!["pfz-gujarat-001:zone-1".to_string()]
    );
}

#[tokio::test]
async fn test_out_of_range_zone_is_skipped() {
    let mut surface = surface();
    surface.mount(engine()).await.unwrap();

    surface.set_advisories(vec![advisory(
        "pfz-kerala-001",
        Sector::Kerala,
        vec![zone("zone-1", 200.0, 75.8), zone("zone-2", 10.2, 75.5)],
    )]);
    assert_eq!(
        sorted_keys(&surface),
        vec!["pfz-kerala-001:zone-2".to_string()]
    );
}

#[tokio::test]
async fn test_popup_closes_when_feature_leaves_snapshot() {
    let mut surface = surface();
    surface.mount(engine()).await.unwrap();
    surface.set_advisories(vec![
        advisory("pfz-kerala-001", Sector::Kerala, vec![zone("zone-1", 9.5, 75.8)]),
        advisory("pfz-gujarat-001", Sector::Gujarat, vec![zone("zone-1", 21.2, 69.8)]),
    ]);

    let pinned = FeatureKey::new("pfz-kerala-001", "zone-1");
    surface.click(&pinned);
    assert_eq!(surface.open_popup_key(), Some(pinned));

    // Advisory drops out of the snapshot; its popup closes in the same pass
    surface.set_advisories(vec![advisory(
        "pfz-gujarat-001",
        Sector::Gujarat,
        vec![zone("zone-1", 21.2, 69.8)],
    )]);
    assert_eq!(surface.open_popup_key(), None);
}

#[tokio::test]
async fn test_single_popup_over_event_sequence() {
    let mut surface = surface();
    surface.mount(engine()).await.unwrap();
    surface.set_advisories(vec![
        advisory("pfz-kerala-001", Sector::Kerala, vec![zone("zone-1", 9.5, 75.8)]),
        advisory("pfz-gujarat-001", Sector::Gujarat, vec![zone("zone-1", 21.2, 69.8)]),
    ]);

    let a = FeatureKey::new("pfz-kerala-001", "zone-1");
    let b = FeatureKey::new("pfz-gujarat-001", "zone-1");

    surface.hover_enter(&a);
    surface.hover_enter(&b);
    surface.click(&a);
    surface.hover_leave();
    surface.hover_enter(&b);

    // Pinned popup on `a` survived everything after the click
    assert_eq!(surface.open_popup_key(), Some(a));

    surface.background_click();
    assert_eq!(surface.open_popup_key(), None);
}

#[tokio::test]
async fn test_sector_navigation_fires_callback_once() {
    let mut surface = surface();
    let selections = Arc::new(AtomicUsize::new(0));
    let counter = selections.clone();
    surface.on_sector_select(Box::new(move |sector| {
        assert_eq!(sector, Sector::Kerala);
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    surface.mount(engine()).await.unwrap();

    surface.select_sector(Sector::Kerala);

    let camera = surface.camera_state();
    assert_eq!(camera.center, Coordinates::new(10.0, 76.2));
    assert_eq!(camera.zoom, 7.0);
    assert_eq!(selections.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unconfigured_sector_is_silent_noop() {
    let mut surface = MapSurface::new(
        &MapConfig::default(),
        SectorNavigator::new(Default::default()),
    );
    let selections = Arc::new(AtomicUsize::new(0));
    let counter = selections.clone();
    surface.on_sector_select(Box::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    surface.mount(engine()).await.unwrap();

    let before = surface.camera_state();
    surface.select_sector(Sector::Kerala);
    assert_eq!(surface.camera_state(), before);
    assert_eq!(selections.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_teardown_is_complete_and_idempotent() {
    let mut surface = surface();
    surface.mount(engine()).await.unwrap();
    surface.set_advisories(vec![advisory(
        "pfz-kerala-001",
        Sector::Kerala,
        vec![zone("zone-1", 9.5, 75.8)],
    )]);
    surface.click(&FeatureKey::new("pfz-kerala-001", "zone-1"));

    surface.unmount();
    assert_eq!(surface.state(), LifecycleState::Disposed);
    assert_eq!(surface.rendered_feature_count(), 0);
    assert_eq!(surface.open_popup_key(), None);

    // Everything after disposal is a no-op, not a panic
    let camera = surface.camera_state();
    surface.zoom_in();
    surface.rotate();
    surface.select_sector(Sector::Kerala);
    surface.set_advisories(vec![advisory(
        "pfz-gujarat-001",
        Sector::Gujarat,
        vec![zone("zone-1", 21.2, 69.8)],
    )]);
    surface.set_layer_visible(LayerKind::Pfz, true);
    surface.set_fullscreen(true);
    assert_eq!(surface.camera_state(), camera);
    assert_eq!(surface.rendered_feature_count(), 0);

    surface.unmount();
    surface.unmount();
}

#[tokio::test]
async fn test_unmount_before_mount_is_safe() {
    let mut surface = surface();
    surface.unmount();
    assert_eq!(surface.state(), LifecycleState::Disposed);
    assert!(matches!(
        surface.mount(engine()).await,
        Err(MapError::InvalidTransition(_))
    ));
}

#[tokio::test]
async fn test_fullscreen_unsupported_is_noop() {
    let mut surface = surface();
    surface.mount(engine()).await.unwrap();
    // HeadlessEngine has no fullscreen capability; the request must neither
    // error nor disturb other state
    surface.set_fullscreen(true);
    assert_eq!(surface.state(), LifecycleState::Ready);
}
