//! Async feed services.
//!
//! Each feed sits behind an `async_trait` so the poller and UI layers are
//! indifferent to whether data comes from the mock backend or a production
//! endpoint. The mock implementations simulate network latency and apply the
//! same filters the real endpoints accept.

use crate::mock;
use async_trait::async_trait;
use pelagos_core::types::{
    Alert, AlertSeverity, AlertType, BoundingBox, ClimateIndex, OceanObservation,
    OceanObservationSummary, PfzAdvisory, Sector, WeatherBulletin,
};
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

/// Errors reported by a feed service.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The upstream endpoint failed or returned an unusable payload
    #[error("Feed request failed: {reason}")]
    RequestFailed { reason: String },

    /// A record was requested by id but does not exist
    #[error("Record not found: {id}")]
    NotFound { id: String },
}

/// Filter parameters for advisory queries.
#[derive(Debug, Clone, Default)]
pub struct AdvisoryQuery {
    pub sector: Option<Sector>,
}

/// Filter parameters for alert queries.
#[derive(Debug, Clone, Default)]
pub struct AlertQuery {
    pub severity: Option<AlertSeverity>,
    pub alert_type: Option<AlertType>,
    pub sector: Option<Sector>,
}

/// Source of PFZ advisories.
#[async_trait]
pub trait AdvisoryService: Send + Sync {
    /// Fetches current advisories matching the query.
    async fn advisories(&self, query: AdvisoryQuery) -> Result<Vec<PfzAdvisory>, FeedError>;

    /// Fetches a single advisory by id.
    async fn advisory_by_id(&self, id: &str) -> Result<PfzAdvisory, FeedError>;
}

/// Source of ocean observations.
#[async_trait]
pub trait ObservationService: Send + Sync {
    /// Fetches observations, optionally restricted to a bounding box.
    async fn observations(
        &self,
        bounds: Option<BoundingBox>,
    ) -> Result<Vec<OceanObservation>, FeedError>;

    /// Fetches per-region observation summaries.
    async fn summaries(&self) -> Result<Vec<OceanObservationSummary>, FeedError>;
}

/// Source of alerts, bulletins, and climate indices.
#[async_trait]
pub trait AlertService: Send + Sync {
    /// Fetches alerts matching the query.
    async fn alerts(&self, query: AlertQuery) -> Result<Vec<Alert>, FeedError>;

    /// Fetches weather bulletins, optionally for one region.
    async fn weather_bulletins(
        &self,
        region: Option<Sector>,
    ) -> Result<Vec<WeatherBulletin>, FeedError>;

    /// Fetches current climate indices.
    async fn climate_indices(&self) -> Result<Vec<ClimateIndex>, FeedError>;
}

/// Simulated latency for mock fetches.
const MOCK_LATENCY: Duration = Duration::from_millis(5);

/// Mock advisory backend.
#[derive(Debug, Default, Clone)]
pub struct MockAdvisoryService;

#[async_trait]
impl AdvisoryService for MockAdvisoryService {
    async fn advisories(&self, query: AdvisoryQuery) -> Result<Vec<PfzAdvisory>, FeedError> {
        sleep(MOCK_LATENCY).await;
        let mut advisories = mock::advisories();
        if let Some(sector) = query.sector {
            advisories.retain(|a| a.sector == sector);
        }
        Ok(advisories)
    }

    async fn advisory_by_id(&self, id: &str) -> Result<PfzAdvisory, FeedError> {
        sleep(MOCK_LATENCY).await;
        mock::advisories()
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| FeedError::NotFound { id: id.to_string() })
    }
}

/// Mock observation backend.
#[derive(Debug, Default, Clone)]
pub struct MockObservationService;

#[async_trait]
impl ObservationService for MockObservationService {
    async fn observations(
        &self,
        bounds: Option<BoundingBox>,
    ) -> Result<Vec<OceanObservation>, FeedError> {
        sleep(MOCK_LATENCY).await;
        let mut observations = mock::observations();
        if let Some(bounds) = bounds {
            observations.retain(|obs| bounds.contains(&obs.location));
        }
        Ok(observations)
    }

    async fn summaries(&self) -> Result<Vec<OceanObservationSummary>, FeedError> {
        sleep(MOCK_LATENCY).await;
        Ok(mock::observation_summaries())
    }
}

/// Mock alert backend.
#[derive(Debug, Default, Clone)]
pub struct MockAlertService;

#[async_trait]
impl AlertService for MockAlertService {
    async fn alerts(&self, query: AlertQuery) -> Result<Vec<Alert>, FeedError> {
        sleep(MOCK_LATENCY).await;
        let mut alerts = mock::alerts();
        if let Some(severity) = query.severity {
            alerts.retain(|a| a.severity == severity);
        }
        if let Some(alert_type) = query.alert_type {
            alerts.retain(|a| a.alert_type == alert_type);
        }
        if let Some(sector) = query.sector {
            alerts.retain(|a| a.affects(sector));
        }
        Ok(alerts)
    }

    async fn weather_bulletins(
        &self,
        region: Option<Sector>,
    ) -> Result<Vec<WeatherBulletin>, FeedError> {
        sleep(MOCK_LATENCY).await;
        let mut bulletins = mock::weather_bulletins();
        if let Some(region) = region {
            bulletins.retain(|b| b.region == region);
        }
        Ok(bulletins)
    }

    async fn climate_indices(&self) -> Result<Vec<ClimateIndex>, FeedError> {
        sleep(MOCK_LATENCY).await;
        Ok(mock::climate_indices())
    }
}
