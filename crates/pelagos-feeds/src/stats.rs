//! Derived aggregates over feed snapshots.

use chrono::{DateTime, Utc};
use pelagos_core::{Alert, PfzAdvisory, Sector};
use std::collections::HashMap;

/// Summary figures derived from an advisory snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdvisoryStats {
    /// Advisories valid at the evaluation instant
    pub active_advisories: usize,
    /// Total advisories in the snapshot, expired ones included
    pub total_advisories: usize,
    /// Zones across all active advisories
    pub total_zones: usize,
    /// Active advisory counts per sector
    pub by_sector: HashMap<Sector, usize>,
    /// Mean sea surface temperature over active zones reporting one
    pub mean_sst: Option<f64>,
}

/// Computes [`AdvisoryStats`] for a snapshot at the given instant.
pub fn advisory_stats(advisories: &[PfzAdvisory], when: DateTime<Utc>) -> AdvisoryStats {
    let mut stats = AdvisoryStats {
        total_advisories: advisories.len(),
        ..Default::default()
    };

    let mut sst_sum = 0.0;
    let mut sst_count = 0usize;

    for advisory in advisories.iter().filter(|a| a.is_valid_at(when)) {
        stats.active_advisories += 1;
        stats.total_zones += advisory.zones.len();
        *stats.by_sector.entry(advisory.sector).or_insert(0) += 1;

        for zone in &advisory.zones {
            if let Some(sst) = zone.sst {
                sst_sum += sst;
                sst_count += 1;
            }
        }
    }

    if sst_count > 0 {
        stats.mean_sst = Some(sst_sum / sst_count as f64);
    }

    stats
}

/// Number of alerts that are neither dismissed nor expired at the given
/// instant.
pub fn active_alert_count(alerts: &[Alert], when: DateTime<Utc>) -> usize {
    alerts
        .iter()
        .filter(|a| !a.is_dismissed && !a.is_expired_at(when))
        .count()
}

/// Active alerts of urgent severity, most severe first.
pub fn urgent_alerts(alerts: &[Alert], when: DateTime<Utc>) -> Vec<&Alert> {
    let mut urgent: Vec<&Alert> = alerts
        .iter()
        .filter(|a| !a.is_dismissed && !a.is_expired_at(when) && a.severity.is_urgent())
        .collect();
    urgent.sort_by_key(|a| a.severity);
    urgent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_advisory_stats_counts_active_only() {
        let mut advisories = mock::advisories();
        // Expire one advisory
        advisories[0].valid_upto = Utc::now() - chrono::Duration::hours(1);

        let stats = advisory_stats(&advisories, Utc::now());
        assert_eq!(stats.total_advisories, 4);
        assert_eq!(stats.active_advisories, 3);
        assert!(stats.mean_sst.is_some());
        assert_eq!(stats.by_sector.values().sum::<usize>(), 3);
    }

    #[test]
    fn test_advisory_stats_empty_snapshot() {
        let stats = advisory_stats(&[], Utc::now());
        assert_eq!(stats.active_advisories, 0);
        assert_eq!(stats.total_zones, 0);
        assert!(stats.mean_sst.is_none());
    }

    #[test]
    fn test_urgent_alerts_filters_by_severity() {
        let alerts = mock::alerts();
        let urgent = urgent_alerts(&alerts, Utc::now());
        assert!(urgent.iter().all(|a| a.severity.is_urgent()));
        assert!(urgent.len() <= active_alert_count(&alerts, Utc::now()));
    }
}
