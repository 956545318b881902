use serde::{Deserialize, Serialize};

use crate::{UtcDateTime, ValidationError};

/// A single earthquake record as delivered by the ingestion feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicEvent {
    pub id: String,
    pub magnitude: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub place: String,
    pub time: UtcDateTime,
    pub depth_km: f64,
}

impl SeismicEvent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        magnitude: f64,
        latitude: f64,
        longitude: f64,
        place: impl Into<String>,
        time: UtcDateTime,
        depth_km: f64,
    ) -> Result<Self, ValidationError> {
        let id = non_empty("id", id.into())?;
        validate_finite("magnitude", magnitude)?;
        validate_finite("depth_km", depth_km)?;
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;

        Ok(Self {
            id,
            magnitude,
            latitude,
            longitude,
            place: place.into(),
            time,
            depth_km,
        })
    }
}

/// Circular treaty coverage area with a monetary limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskZone {
    pub id: String,
    pub name: String,
    pub peril: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
    pub limit_usd: u64,
}

impl RiskZone {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        peril: impl Into<String>,
        region: impl Into<String>,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
        limit_usd: u64,
    ) -> Result<Self, ValidationError> {
        let id = non_empty("id", id.into())?;
        let name = non_empty("name", name.into())?;
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;
        validate_finite("radius_km", radius_km)?;
        if radius_km <= 0.0 {
            return Err(ValidationError::NonPositiveRadius { value: radius_km });
        }

        Ok(Self {
            id,
            name,
            peril: peril.into(),
            region: region.into(),
            latitude,
            longitude,
            radius_km,
            limit_usd,
        })
    }

    /// Re-run constructor checks on a zone that arrived through deserialization.
    pub fn validated(self) -> Result<Self, ValidationError> {
        Self::new(
            self.id,
            self.name,
            self.peril,
            self.region,
            self.latitude,
            self.longitude,
            self.radius_km,
            self.limit_usd,
        )
    }
}

/// An event epicenter that falls inside a zone's radius.
///
/// Carries owned copies of both sides so alerts can outlive the event list
/// and zone catalog they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureAlert {
    pub event: SeismicEvent,
    pub zone: RiskZone,
    pub distance_km: f64,
}

impl ExposureAlert {
    pub fn new(event: SeismicEvent, zone: RiskZone, distance_km: f64) -> Self {
        Self {
            event,
            zone,
            distance_km,
        }
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value)
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

fn validate_latitude(value: f64) -> Result<(), ValidationError> {
    validate_finite("latitude", value)?;
    if !(-90.0..=90.0).contains(&value) {
        return Err(ValidationError::LatitudeOutOfRange { value });
    }
    Ok(())
}

fn validate_longitude(value: f64) -> Result<(), ValidationError> {
    validate_finite("longitude", value)?;
    if !(-180.0..=180.0).contains(&value) {
        return Err(ValidationError::LongitudeOutOfRange { value });
    }
    Ok(())
}
