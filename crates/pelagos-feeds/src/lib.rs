//! Data feeds for the Pelagos platform.
//!
//! Each feed (PFZ advisories, ocean observations, alerts, climate indices)
//! sits behind an async service trait with a mock implementation standing in
//! for the production endpoints. The poller layer revalidates each feed on a
//! configured interval and publishes whole-snapshot values over watch
//! channels, so consumers always see the most recent snapshot and stale
//! intermediate ones are skipped.

pub mod mock;
pub mod poller;
pub mod service;
pub mod stats;

pub use poller::{spawn_feed, FeedHandle, FeedState};
pub use service::{
    AdvisoryQuery, AdvisoryService, AlertQuery, AlertService, FeedError, MockAdvisoryService,
    MockAlertService, MockObservationService, ObservationService,
};
pub use stats::{active_alert_count, advisory_stats, urgent_alerts, AdvisoryStats};
