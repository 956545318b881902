use std::collections::BTreeSet;

use crate::{ExposureAlert, RiskZone, SeismicEvent};

use super::find_exposed_zones;

/// Run the matcher for every event and concatenate the results in event order.
///
/// Alerts are grouped per event and sorted by distance within each group;
/// there is no global distance ordering across events.
pub fn evaluate_events(events: &[SeismicEvent], zones: &[RiskZone]) -> Vec<ExposureAlert> {
    let alerts = events
        .iter()
        .flat_map(|event| find_exposed_zones(event, zones))
        .collect::<Vec<_>>();

    tracing::debug!(
        events = events.len(),
        zones = zones.len(),
        alerts = alerts.len(),
        "evaluated seismic exposure"
    );
    alerts
}

/// Alerts ordered by zone limit, largest exposure first. Stable on ties.
pub fn rank_by_exposure(alerts: &[ExposureAlert]) -> Vec<&ExposureAlert> {
    let mut ranked = alerts.iter().collect::<Vec<_>>();
    ranked.sort_by(|left, right| right.zone.limit_usd.cmp(&left.zone.limit_usd));
    ranked
}

pub fn affected_zone_ids(alerts: &[ExposureAlert]) -> BTreeSet<&str> {
    alerts.iter().map(|alert| alert.zone.id.as_str()).collect()
}

pub fn alerts_for_event<'a>(
    alerts: &'a [ExposureAlert],
    event_id: &'a str,
) -> impl Iterator<Item = &'a ExposureAlert> + 'a {
    alerts.iter().filter(move |alert| alert.event.id == event_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UtcDateTime;

    fn event(id: &str, latitude: f64, longitude: f64) -> SeismicEvent {
        SeismicEvent::new(
            id,
            6.1,
            latitude,
            longitude,
            "Test",
            UtcDateTime::parse("2024-01-01T00:00:00Z").expect("timestamp"),
            12.0,
        )
        .expect("valid event")
    }

    fn zones() -> Vec<RiskZone> {
        let california = RiskZone::new(
            "CA",
            "California XL",
            "EQ",
            "US-CA",
            36.7783,
            -119.4179,
            400.0,
            50_000_000,
        )
        .expect("valid zone");
        let japan = RiskZone::new("JP", "Japan QS", "EQ", "JP", 35.6762, 139.6503, 500.0, 75_000_000)
            .expect("valid zone");
        vec![california, japan]
    }

    #[test]
    fn concatenates_alerts_in_event_order() {
        let events = vec![
            event("tokyo", 35.7, 139.7),
            event("atlantic", 0.0, -30.0),
            event("fresno", 36.8, -119.8),
        ];

        let alerts = evaluate_events(&events, &zones());
        let pairs = alerts
            .iter()
            .map(|alert| (alert.event.id.as_str(), alert.zone.id.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(pairs, [("tokyo", "JP"), ("fresno", "CA")]);
    }

    #[test]
    fn ranks_by_limit_descending() {
        let events = vec![event("fresno", 36.8, -119.8), event("tokyo", 35.7, 139.7)];
        let alerts = evaluate_events(&events, &zones());

        let ranked = rank_by_exposure(&alerts);
        assert_eq!(ranked[0].zone.id, "JP");
        assert_eq!(ranked[1].zone.id, "CA");
    }

    #[test]
    fn finds_alerts_and_zone_ids() {
        let events = vec![event("fresno", 36.8, -119.8), event("tokyo", 35.7, 139.7)];
        let alerts = evaluate_events(&events, &zones());

        assert_eq!(alerts_for_event(&alerts, "tokyo").count(), 1);
        assert_eq!(alerts_for_event(&alerts, "missing").count(), 0);
        assert_eq!(
            affected_zone_ids(&alerts).into_iter().collect::<Vec<_>>(),
            ["CA", "JP"]
        );
    }

    #[test]
    fn no_events_means_no_alerts() {
        assert!(evaluate_events(&[], &zones()).is_empty());
    }
}
