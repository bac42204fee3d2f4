//! Validation for externally sourced domain values.

use crate::error::ValidationError;
use crate::types::{Coordinates, PfzAdvisory};

/// Validates a geographic coordinate pair.
pub fn validate_coordinates(point: &Coordinates) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&point.latitude) || point.latitude.is_nan() {
        return Err(ValidationError::InvalidLatitude(point.latitude));
    }

    if !(-180.0..=180.0).contains(&point.longitude) || point.longitude.is_nan() {
        return Err(ValidationError::InvalidLongitude(point.longitude));
    }

    Ok(())
}

/// Validates an advisory record as delivered by a feed.
///
/// Zone coordinates are deliberately not checked here: a bad zone must not
/// reject the whole advisory, so per-zone checks happen where zones are
/// consumed (see the map feature synchronizer).
pub fn validate_advisory(advisory: &PfzAdvisory) -> Result<(), ValidationError> {
    if advisory.id.is_empty() {
        return Err(ValidationError::EmptyId("advisory id".to_string()));
    }

    if advisory.valid_upto <= advisory.valid_from {
        return Err(ValidationError::InvalidValidityWindow(
            advisory.valid_upto.to_rfc3339(),
            advisory.valid_from.to_rfc3339(),
        ));
    }

    Ok(())
}
