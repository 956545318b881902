//! Presentation-ready bundle of events, alerts and exposure totals.

use serde::Serialize;

use crate::exposure::{affected_zone_ids, rank_by_exposure, summarize_exposure, ExposureSummary};
use crate::{EventCounts, ExposureAlert, MagnitudeBand, RiskZone, SeismicEvent};

/// Alert row as shown in the alerts panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertRow {
    pub event_id: String,
    pub magnitude: f64,
    pub band: MagnitudeBand,
    pub place: String,
    pub zone_id: String,
    pub zone_name: String,
    pub limit_usd: u64,
    pub distance_km: f64,
}

impl From<&ExposureAlert> for AlertRow {
    fn from(alert: &ExposureAlert) -> Self {
        Self {
            event_id: alert.event.id.clone(),
            magnitude: alert.event.magnitude,
            band: MagnitudeBand::classify(alert.event.magnitude),
            place: alert.event.place.clone(),
            zone_id: alert.zone.id.clone(),
            zone_name: alert.zone.name.clone(),
            limit_usd: alert.zone.limit_usd,
            distance_km: alert.distance_km,
        }
    }
}

/// Everything a dashboard needs for one evaluation cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposureReport {
    pub events: EventCounts,
    pub zones_monitored: usize,
    pub zones_at_risk: usize,
    pub summary: ExposureSummary,
    /// Ordered by zone limit, largest first.
    pub alerts: Vec<AlertRow>,
}

impl ExposureReport {
    pub fn build(events: &[SeismicEvent], zones: &[RiskZone], alerts: &[ExposureAlert]) -> Self {
        Self {
            events: EventCounts::from_events(events),
            zones_monitored: zones.len(),
            zones_at_risk: affected_zone_ids(alerts).len(),
            summary: summarize_exposure(alerts),
            alerts: rank_by_exposure(alerts)
                .into_iter()
                .map(AlertRow::from)
                .collect(),
        }
    }
}
