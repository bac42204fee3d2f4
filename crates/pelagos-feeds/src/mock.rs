//! Mock datasets for development and tests.
//!
//! These mirror the records the production endpoints serve; validity windows
//! are anchored to the current time so the data always looks fresh.

use chrono::{Duration, Utc};
use pelagos_core::types::{
    Alert, AlertSeverity, AlertType, CatchOutlook, ClimateIndex, Coordinates, DataSource,
    FishSpecies, IndexStatus, OceanObservation, OceanObservationSummary, PfzAdvisory, PfzZone,
    Sector, WeatherBulletin,
};

fn species(
    name: &str,
    local_name: &str,
    expected_catch: CatchOutlook,
) -> FishSpecies {
    FishSpecies {
        name: name.to_string(),
        local_name: Some(local_name.to_string()),
        scientific_name: None,
        expected_catch: Some(expected_catch),
    }
}

fn zone(id: &str, lat: f64, lon: f64, depth: f64, shore: f64, sst: f64, chl: f64) -> PfzZone {
    PfzZone {
        id: id.to_string(),
        coordinates: Coordinates::new(lat, lon),
        bounding_box: None,
        depth: Some(depth),
        distance_from_shore: Some(shore),
        sst: Some(sst),
        chlorophyll: Some(chl),
    }
}

/// Current PFZ advisories, one per active sector.
pub fn advisories() -> Vec<PfzAdvisory> {
    let now = Utc::now();
    let valid_upto = now + Duration::days(2);

    vec![
        PfzAdvisory {
            id: "pfz-kerala-001".to_string(),
            sector: Sector::Kerala,
            forecast_date: now,
            valid_from: now,
            valid_upto,
            zones: vec![
                zone("zone-1", 9.5, 75.8, 50.0, 25.0, 28.5, 0.8),
                zone("zone-2", 10.2, 75.5, 40.0, 20.0, 29.0, 1.2),
            ],
            fish_species: vec![
                species("Sardine", "\u{0d1a}\u{0d3e}\u{0d33}", CatchOutlook::High),
                species("Mackerel", "\u{0d05}\u{0d2f}\u{0d32}", CatchOutlook::Medium),
                species("Tuna", "\u{0d1a}\u{0d42}\u{0d30}", CatchOutlook::Low),
            ],
            remarks: Some("Good fishing conditions expected. Moderate seas.".to_string()),
            data_source: DataSource::Incois,
            last_updated: now,
        },
        PfzAdvisory {
            id: "pfz-tamil-nadu-001".to_string(),
            sector: Sector::TamilNadu,
            forecast_date: now,
            valid_from: now,
            valid_upto,
            zones: vec![zone("zone-1", 11.5, 80.2, 60.0, 30.0, 29.2, 0.9)],
            fish_species: vec![
                species("Pomfret", "\u{0bb5}\u{0bbe}\u{0bb5}\u{0bb2}\u{0bcd}", CatchOutlook::High),
                species(
                    "Seer Fish",
                    "\u{0bb5}\u{0b9e}\u{0bcd}\u{0b9a}\u{0bbf}\u{0bb0}\u{0bae}\u{0bcd}",
                    CatchOutlook::Medium,
                ),
            ],
            remarks: Some("Favorable conditions for fishing.".to_string()),
            data_source: DataSource::Incois,
            last_updated: now,
        },
        PfzAdvisory {
            id: "pfz-andhra-001".to_string(),
            sector: Sector::AndhraPradesh,
            forecast_date: now,
            valid_from: now,
            valid_upto,
            zones: vec![zone("zone-1", 16.5, 82.5, 45.0, 22.0, 28.8, 1.0)],
            fish_species: vec![
                species("Ribbon Fish", "\u{0c38}\u{0c35}\u{0c30}", CatchOutlook::High),
                species(
                    "Prawns",
                    "\u{0c30}\u{0c4a}\u{0c2f}\u{0c4d}\u{0c2f}\u{0c32}\u{0c41}",
                    CatchOutlook::Medium,
                ),
            ],
            remarks: Some(
                "Good chlorophyll concentration indicates high fish availability.".to_string(),
            ),
            data_source: DataSource::Incois,
            last_updated: now,
        },
        PfzAdvisory {
            id: "pfz-gujarat-001".to_string(),
            sector: Sector::Gujarat,
            forecast_date: now,
            valid_from: now,
            valid_upto,
            zones: vec![zone("zone-1", 21.2, 69.8, 35.0, 18.0, 27.5, 1.5)],
            fish_species: vec![
                species(
                    "Bombay Duck",
                    "\u{0aac}\u{0acb}\u{0aae}\u{0acd}\u{0aac}\u{0abf}\u{0ab2}",
                    CatchOutlook::High,
                ),
                species(
                    "Pomfret",
                    "\u{0aaa}\u{0abe}\u{0aaa}\u{0ab2}\u{0ac7}\u{0a9f}",
                    CatchOutlook::Medium,
                ),
            ],
            remarks: Some("High productivity zone identified.".to_string()),
            data_source: DataSource::Incois,
            last_updated: now,
        },
    ]
}

/// Recent in-situ ocean observations.
pub fn observations() -> Vec<OceanObservation> {
    let now = Utc::now();
    let base = |id: &str, lat: f64, lon: f64| OceanObservation {
        id: id.to_string(),
        location: Coordinates::new(lat, lon),
        timestamp: now,
        sst: 0.0,
        sst_anomaly: None,
        chlorophyll_a: None,
        salinity: None,
        current_speed: None,
        current_direction: None,
        wave_height: None,
        wave_period: None,
        wind_speed: None,
        wind_direction: None,
        data_source: DataSource::Incois,
    };

    vec![
        OceanObservation {
            sst: 28.5,
            sst_anomaly: Some(0.3),
            chlorophyll_a: Some(0.85),
            salinity: Some(34.5),
            current_speed: Some(0.5),
            current_direction: Some(45.0),
            wave_height: Some(1.2),
            wave_period: Some(8.0),
            wind_speed: Some(12.0),
            wind_direction: Some(225.0),
            ..base("obs-1", 10.0, 76.0)
        },
        OceanObservation {
            sst: 29.2,
            sst_anomaly: Some(0.5),
            chlorophyll_a: Some(0.72),
            salinity: Some(33.8),
            current_speed: Some(0.4),
            current_direction: Some(90.0),
            wave_height: Some(0.8),
            wave_period: Some(6.0),
            wind_speed: Some(8.0),
            wind_direction: Some(180.0),
            ..base("obs-2", 13.0, 80.5)
        },
        OceanObservation {
            sst: 28.8,
            sst_anomaly: Some(0.2),
            chlorophyll_a: Some(1.1),
            salinity: Some(34.2),
            current_speed: Some(0.6),
            current_direction: Some(60.0),
            wave_height: Some(1.5),
            wave_period: Some(10.0),
            wind_speed: Some(15.0),
            wind_direction: Some(270.0),
            ..base("obs-3", 16.5, 82.0)
        },
        OceanObservation {
            sst: 27.5,
            sst_anomaly: Some(-0.3),
            chlorophyll_a: Some(1.5),
            salinity: Some(35.0),
            current_speed: Some(0.3),
            current_direction: Some(120.0),
            wave_height: Some(1.0),
            wave_period: Some(7.0),
            wind_speed: Some(10.0),
            wind_direction: Some(315.0),
            ..base("obs-4", 21.0, 70.0)
        },
    ]
}

/// Per-region observation aggregates.
pub fn observation_summaries() -> Vec<OceanObservationSummary> {
    let now = Utc::now();
    let summary = |region, avg_sst, min_sst, max_sst, avg_chlorophyll, observation_count| {
        OceanObservationSummary {
            region,
            avg_sst,
            min_sst,
            max_sst,
            avg_chlorophyll,
            observation_count,
            last_updated: now,
        }
    };

    vec![
        summary(Sector::Kerala, 28.5, 27.8, 29.2, 0.85, 45),
        summary(Sector::TamilNadu, 29.2, 28.5, 30.1, 0.72, 38),
        summary(Sector::AndhraPradesh, 28.8, 27.5, 29.8, 1.1, 42),
        summary(Sector::Gujarat, 27.5, 26.2, 28.5, 1.5, 35),
        summary(Sector::Maharashtra, 28.0, 27.0, 29.0, 0.95, 30),
        summary(Sector::Odisha, 28.3, 27.2, 29.5, 1.2, 28),
        summary(Sector::WestBengal, 28.1, 27.0, 29.3, 1.3, 25),
        summary(Sector::Karnataka, 28.7, 27.5, 29.8, 0.88, 22),
    ]
}

/// Active marine alerts.
pub fn alerts() -> Vec<Alert> {
    let now = Utc::now();

    vec![
        Alert {
            id: "alert-1".to_string(),
            alert_type: AlertType::HighWave,
            severity: AlertSeverity::Medium,
            title: "High Wave Alert - Bay of Bengal".to_string(),
            message: "Wave heights of 2.5-3.5m expected along the Tamil Nadu and Andhra Pradesh coast."
                .to_string(),
            issued_at: now,
            expires_at: Some(now + Duration::hours(24)),
            affected_sectors: vec![Sector::TamilNadu, Sector::AndhraPradesh],
            coordinates: None,
            action_required: Some(
                "Fishermen are advised not to venture into deep sea areas.".to_string(),
            ),
            source: DataSource::Incois,
            is_read: false,
            is_dismissed: false,
        },
        Alert {
            id: "alert-2".to_string(),
            alert_type: AlertType::Weather,
            severity: AlertSeverity::Low,
            title: "Weather Advisory - Kerala Coast".to_string(),
            message:
                "Light to moderate rainfall expected along the Kerala coast. Sea conditions favorable for fishing."
                    .to_string(),
            issued_at: now - Duration::hours(2),
            expires_at: Some(now + Duration::hours(48)),
            affected_sectors: vec![Sector::Kerala],
            coordinates: None,
            action_required: None,
            source: DataSource::Incois,
            is_read: true,
            is_dismissed: false,
        },
        Alert {
            id: "alert-3".to_string(),
            alert_type: AlertType::AlgalBloom,
            severity: AlertSeverity::Info,
            title: "Algal Bloom Detection - Gujarat".to_string(),
            message: "Moderate algal bloom detected off the Gujarat coast. No immediate threat to marine life."
                .to_string(),
            issued_at: now - Duration::hours(6),
            expires_at: None,
            affected_sectors: vec![Sector::Gujarat],
            coordinates: Some(Coordinates::new(21.5, 69.5)),
            action_required: None,
            source: DataSource::Incois,
            is_read: false,
            is_dismissed: false,
        },
    ]
}

/// Daily weather bulletins.
pub fn weather_bulletins() -> Vec<WeatherBulletin> {
    let now = Utc::now();

    vec![
        WeatherBulletin {
            id: "wb-1".to_string(),
            region: Sector::Kerala,
            alert_type: AlertType::Weather,
            severity: AlertSeverity::Low,
            title: "Daily Weather Bulletin - Kerala".to_string(),
            description: "Fair weather conditions expected. Light winds from southwest.".to_string(),
            issued_at: now,
            valid_from: now,
            valid_upto: now + Duration::hours(24),
            affected_areas: ["Thiruvananthapuram", "Kollam", "Alappuzha", "Kochi", "Kozhikode"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            advisory_text: "Favorable conditions for fishing activities. Small craft advisory in effect."
                .to_string(),
            data_source: DataSource::Incois,
        },
        WeatherBulletin {
            id: "wb-2".to_string(),
            region: Sector::TamilNadu,
            alert_type: AlertType::HighWave,
            severity: AlertSeverity::Medium,
            title: "Sea State Warning - Tamil Nadu".to_string(),
            description: "Rough sea conditions expected. Wave heights 2-3 meters.".to_string(),
            issued_at: now,
            valid_from: now,
            valid_upto: now + Duration::hours(36),
            affected_areas: ["Chennai", "Cuddalore", "Nagapattinam", "Rameswaram"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            advisory_text: "Fishermen are advised to exercise caution. Avoid deep sea fishing."
                .to_string(),
            data_source: DataSource::Incois,
        },
    ]
}

/// Current climate indices.
pub fn climate_indices() -> Vec<ClimateIndex> {
    let now = Utc::now();

    vec![
        ClimateIndex {
            name: "El Ni\u{00f1}o Index (ENSO)".to_string(),
            value: 0.8,
            anomaly: Some(0.3),
            status: IndexStatus::Watch,
            timestamp: now,
            description: Some("Weak El Ni\u{00f1}o conditions developing".to_string()),
        },
        ClimateIndex {
            name: "Indian Ocean Dipole (IOD)".to_string(),
            value: -0.2,
            anomaly: Some(-0.1),
            status: IndexStatus::Normal,
            timestamp: now,
            description: Some("Neutral IOD conditions".to_string()),
        },
        ClimateIndex {
            name: "SST Anomaly (Bay of Bengal)".to_string(),
            value: 0.5,
            anomaly: None,
            status: IndexStatus::Normal,
            timestamp: now,
            description: Some("Slightly warmer than normal".to_string()),
        },
        ClimateIndex {
            name: "SST Anomaly (Arabian Sea)".to_string(),
            value: 0.3,
            anomaly: None,
            status: IndexStatus::Normal,
            timestamp: now,
            description: Some("Near normal conditions".to_string()),
        },
    ]
}
