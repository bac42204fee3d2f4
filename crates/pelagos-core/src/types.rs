//! Domain types for the Pelagos marine-data platform.
//!
//! These types model the data served by the advisory, observation, and alert
//! feeds. Feed snapshots are value types: they are replaced wholesale on every
//! revalidation tick and never mutated in place by consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coastal sector covered by the platform.
///
/// The sector list is a static, closed configuration: every advisory, alert,
/// and camera preset refers to one of these twelve regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sector {
    Gujarat,
    Maharashtra,
    Goa,
    Karnataka,
    Kerala,
    TamilNadu,
    AndhraPradesh,
    Odisha,
    WestBengal,
    Andaman,
    Nicobar,
    Lakshadweep,
}

impl Sector {
    /// All sectors, in coastline order (west coast north to south, then east).
    pub const ALL: [Sector; 12] = [
        Sector::Gujarat,
        Sector::Maharashtra,
        Sector::Goa,
        Sector::Karnataka,
        Sector::Kerala,
        Sector::TamilNadu,
        Sector::AndhraPradesh,
        Sector::Odisha,
        Sector::WestBengal,
        Sector::Andaman,
        Sector::Nicobar,
        Sector::Lakshadweep,
    ];

    /// Human-readable sector name (underscores replaced with spaces).
    pub fn display_name(&self) -> &'static str {
        match self {
            Sector::Gujarat => "Gujarat",
            Sector::Maharashtra => "Maharashtra",
            Sector::Goa => "Goa",
            Sector::Karnataka => "Karnataka",
            Sector::Kerala => "Kerala",
            Sector::TamilNadu => "Tamil Nadu",
            Sector::AndhraPradesh => "Andhra Pradesh",
            Sector::Odisha => "Odisha",
            Sector::WestBengal => "West Bengal",
            Sector::Andaman => "Andaman",
            Sector::Nicobar => "Nicobar",
            Sector::Lakshadweep => "Lakshadweep",
        }
    }

    /// Parses the canonical SCREAMING_SNAKE_CASE identifier.
    pub fn from_id(id: &str) -> Option<Sector> {
        match id {
            "GUJARAT" => Some(Sector::Gujarat),
            "MAHARASHTRA" => Some(Sector::Maharashtra),
            "GOA" => Some(Sector::Goa),
            "KARNATAKA" => Some(Sector::Karnataka),
            "KERALA" => Some(Sector::Kerala),
            "TAMIL_NADU" => Some(Sector::TamilNadu),
            "ANDHRA_PRADESH" => Some(Sector::AndhraPradesh),
            "ODISHA" => Some(Sector::Odisha),
            "WEST_BENGAL" => Some(Sector::WestBengal),
            "ANDAMAN" => Some(Sector::Andaman),
            "NICOBAR" => Some(Sector::Nicobar),
            "LAKSHADWEEP" => Some(Sector::Lakshadweep),
            _ => None,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Axis-aligned geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Returns true if the point falls inside (or on the edge of) the box.
    pub fn contains(&self, point: &Coordinates) -> bool {
        point.latitude >= self.south
            && point.latitude <= self.north
            && point.longitude >= self.west
            && point.longitude <= self.east
    }
}

/// Expected catch level for a species within an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatchOutlook {
    High,
    Medium,
    Low,
}

/// A fish species listed on an advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishSpecies {
    pub name: String,

    /// Name in the regional language, if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_catch: Option<CatchOutlook>,
}

impl FishSpecies {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local_name: None,
            scientific_name: None,
            expected_catch: None,
        }
    }
}

/// A single potential fishing zone within an advisory.
///
/// Zones are owned exclusively by their advisory and have no independent
/// lifecycle; a zone id is only unique within its advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PfzZone {
    pub id: String,
    pub coordinates: Coordinates,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,

    /// Water depth in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,

    /// Distance from shore in kilometers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_from_shore: Option<f64>,

    /// Sea surface temperature in degrees Celsius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sst: Option<f64>,

    /// Chlorophyll-a concentration in mg/m3
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chlorophyll: Option<f64>,
}

/// A potential fishing zone advisory for one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PfzAdvisory {
    /// Globally unique advisory identifier
    pub id: String,
    pub sector: Sector,
    pub forecast_date: DateTime<Utc>,
    pub valid_from: DateTime<Utc>,
    pub valid_upto: DateTime<Utc>,
    pub zones: Vec<PfzZone>,
    pub fish_species: Vec<FishSpecies>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    pub data_source: DataSource,
    pub last_updated: DateTime<Utc>,
}

impl PfzAdvisory {
    /// Returns true if the advisory is valid at the given instant.
    pub fn is_valid_at(&self, when: DateTime<Utc>) -> bool {
        when >= self.valid_from && when <= self.valid_upto
    }

    /// Names of the top species expected in this advisory, for labels.
    pub fn species_summary(&self, limit: usize) -> String {
        self.fish_species
            .iter()
            .take(limit)
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Originating agency for a data record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSource {
    Incois,
    Imd,
    Isro,
    Niot,
    External,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataSource::Incois => "INCOIS",
            DataSource::Imd => "IMD",
            DataSource::Isro => "ISRO",
            DataSource::Niot => "NIOT",
            DataSource::External => "EXTERNAL",
        };
        write!(f, "{name}")
    }
}

/// An in-situ or satellite ocean observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OceanObservation {
    pub id: String,
    pub location: Coordinates,
    pub timestamp: DateTime<Utc>,

    /// Sea surface temperature in degrees Celsius
    pub sst: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sst_anomaly: Option<f64>,

    /// Chlorophyll-a concentration in mg/m3
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chlorophyll_a: Option<f64>,

    /// Salinity in PSU
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salinity: Option<f64>,

    /// Surface current speed in m/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_speed: Option<f64>,

    /// Surface current direction in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_direction: Option<f64>,

    /// Significant wave height in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_height: Option<f64>,

    /// Wave period in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_period: Option<f64>,

    /// Wind speed in m/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,

    /// Wind direction in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<f64>,

    pub data_source: DataSource,
}

/// Per-region aggregate of recent ocean observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OceanObservationSummary {
    pub region: Sector,
    pub avg_sst: f64,
    pub min_sst: f64,
    pub max_sst: f64,
    pub avg_chlorophyll: f64,
    pub observation_count: u32,
    pub last_updated: DateTime<Utc>,
}

/// Severity of an alert, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl AlertSeverity {
    /// Returns true for severities that warrant immediate attention.
    pub fn is_urgent(&self) -> bool {
        matches!(self, AlertSeverity::Critical | AlertSeverity::High)
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlertSeverity::Critical => "critical",
            AlertSeverity::High => "high",
            AlertSeverity::Medium => "medium",
            AlertSeverity::Low => "low",
            AlertSeverity::Info => "info",
        };
        write!(f, "{name}")
    }
}

/// Category of a marine alert or bulletin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    Tsunami,
    StormSurge,
    Cyclone,
    AlgalBloom,
    CoralBleaching,
    MarineHeatwave,
    HighWave,
    Pfz,
    Weather,
}

/// A marine alert issued for one or more sectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub issued_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    pub affected_sectors: Vec<Sector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_required: Option<String>,

    pub source: DataSource,

    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_dismissed: bool,
}

impl Alert {
    /// Returns true if the alert affects the given sector.
    pub fn affects(&self, sector: Sector) -> bool {
        self.affected_sectors.contains(&sector)
    }

    /// Returns true if the alert has expired by the given instant.
    pub fn is_expired_at(&self, when: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < when)
    }
}

/// A daily weather bulletin for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherBulletin {
    pub id: String,
    pub region: Sector,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    pub issued_at: DateTime<Utc>,
    pub valid_from: DateTime<Utc>,
    pub valid_upto: DateTime<Utc>,
    pub affected_areas: Vec<String>,
    pub advisory_text: String,
    pub data_source: DataSource,
}

/// Status band for a climate index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexStatus {
    Normal,
    Watch,
    Warning,
    Alert,
}

/// A named climate index (ENSO, IOD, regional SST anomaly).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateIndex {
    pub name: String,
    pub value: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly: Option<f64>,

    pub status: IndexStatus,
    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A static camera target for sector navigation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPreset {
    pub center: Coordinates,
    pub zoom: f64,
}

impl CameraPreset {
    pub fn new(latitude: f64, longitude: f64, zoom: f64) -> Self {
        Self {
            center: Coordinates::new(latitude, longitude),
            zoom,
        }
    }
}
