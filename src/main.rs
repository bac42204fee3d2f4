use anyhow::{Context, Result};
use clap::Parser;
use pelagos_core::{AppConfig, Sector};
use pelagos_feeds::{
    active_alert_count, advisory_stats, spawn_feed, AdvisoryQuery, AdvisoryService, AlertQuery,
    AlertService, MockAdvisoryService, MockAlertService,
};
use pelagos_map::{FeatureKey, HeadlessEngine, LayerKind, MapSurface, SectorNavigator};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Pelagos - Marine fisheries advisory dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sector to navigate to after the initial render, e.g. KERALA
    #[arg(short, long, default_value = "KERALA")]
    sector: String,

    /// Log filter, e.g. "pelagos=debug"
    #[arg(long, env = "PELAGOS_LOG", default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .init();

    let config = match &args.config {
        Some(path) => AppConfig::from_config_builder(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::new(),
    };
    config.validate().context("Invalid configuration")?;

    let sector = Sector::from_id(&args.sector.to_uppercase())
        .with_context(|| format!("Unknown sector: {}", args.sector))?;

    info!(
        center = ?config.map.center(),
        zoom = config.map.zoom,
        "Starting Pelagos dashboard"
    );

    // Feeds publish whole snapshots over watch channels; the surface always
    // reconciles against the latest one.
    let advisory_svc = Arc::new(MockAdvisoryService);
    let alert_svc = Arc::new(MockAlertService);

    let advisory_feed = {
        let svc = advisory_svc.clone();
        spawn_feed("pfz-advisories", config.refresh.pfz_interval(), move || {
            let svc = svc.clone();
            async move { svc.advisories(AdvisoryQuery::default()).await }
        })
    };
    let alert_feed = {
        let svc = alert_svc.clone();
        spawn_feed("alerts", config.refresh.alerts_interval(), move || {
            let svc = svc.clone();
            async move { svc.alerts(AlertQuery::default()).await }
        })
    };

    let mut surface = MapSurface::new(
        &config.map,
        SectorNavigator::new(pelagos_core::sector_presets()),
    );
    surface.on_sector_select(Box::new(|sector| {
        info!(%sector, "Sector selected");
    }));

    // Camera intents issued before the engine is up replay once it mounts.
    surface.zoom_in();
    surface.select_sector(sector);

    surface
        .mount(Box::new(HeadlessEngine::new(
            config.map.center(),
            config.map.zoom,
        )))
        .await
        .context("Failed to mount map surface")?;

    // First advisory snapshot onto the map
    let mut advisories_rx = advisory_feed.subscribe();
    let advisories = advisories_rx
        .wait_for(|state| !state.is_loading())
        .await
        .context("Advisory feed closed before first snapshot")?
        .data()
        .cloned();
    if let Some(advisories) = advisories {
        let stats = advisory_stats(&advisories, chrono::Utc::now());
        info!(
            active = stats.active_advisories,
            zones = stats.total_zones,
            mean_sst = ?stats.mean_sst,
            "Advisory snapshot received"
        );
        surface.set_advisories(advisories);
    }
    info!(
        features = surface.rendered_feature_count(),
        camera = ?surface.camera_state(),
        "Initial render complete"
    );

    let mut alerts_rx = alert_feed.subscribe();
    let alerts = alerts_rx
        .wait_for(|state| !state.is_loading())
        .await
        .context("Alert feed closed before first snapshot")?
        .data()
        .cloned();
    if let Some(alerts) = alerts {
        info!(
            active = active_alert_count(&alerts, chrono::Utc::now()),
            "Alert snapshot received"
        );
    }

    // Walk through the interactions a dashboard session exercises
    if let Some(key) = surface.rendered_keys().first().cloned() {
        demo_interactions(&mut surface, &key);
    }

    surface.set_layer_visible(LayerKind::Pfz, false);
    info!(
        features = surface.rendered_feature_count(),
        "PFZ layer hidden"
    );
    surface.set_layer_visible(LayerKind::Pfz, true);
    info!(
        features = surface.rendered_feature_count(),
        "PFZ layer restored"
    );

    surface.reset_view();
    surface.unmount();
    advisory_feed.shutdown();
    alert_feed.shutdown();
    info!("Shutdown complete");

    Ok(())
}

fn demo_interactions(surface: &mut MapSurface, key: &FeatureKey) {
    surface.hover_enter(key);
    info!(popup = ?surface.open_popup_key(), "Hover popup");
    surface.click(key);
    surface.hover_leave();
    info!(popup = ?surface.open_popup_key(), "Popup pinned through hover-leave");
    surface.background_click();
    info!(popup = ?surface.open_popup_key(), "Popup dismissed");
}
