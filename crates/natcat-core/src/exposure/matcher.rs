use crate::{ExposureAlert, RiskZone, SeismicEvent};

/// Zones whose radius covers the event epicenter, closest first.
///
/// Inclusion compares the raw haversine distance against `radius_km`
/// (boundary inclusive). The distance stored on each alert is rounded to two
/// decimals. The sort is stable, so equal distances keep the zone order
/// given by the caller.
pub fn find_exposed_zones(event: &SeismicEvent, zones: &[RiskZone]) -> Vec<ExposureAlert> {
    let epicenter = event.epicenter();
    let mut alerts = zones
        .iter()
        .filter_map(|zone| {
            let distance = epicenter.distance_km(zone.center());
            (distance <= zone.radius_km)
                .then(|| ExposureAlert::new(event.clone(), zone.clone(), round_distance(distance)))
        })
        .collect::<Vec<_>>();

    alerts.sort_by(|left, right| left.distance_km.total_cmp(&right.distance_km));
    alerts
}

/// Round to two decimal places, ties to even.
pub fn round_distance(distance_km: f64) -> f64 {
    (distance_km * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::distance_km;
    use crate::UtcDateTime;

    fn event_at(latitude: f64, longitude: f64) -> SeismicEvent {
        SeismicEvent::new(
            "test1",
            5.5,
            latitude,
            longitude,
            "Central California",
            UtcDateTime::parse("2024-06-01T08:30:00Z").expect("timestamp"),
            10.0,
        )
        .expect("valid event")
    }

    fn zone(id: &str, latitude: f64, longitude: f64, radius_km: f64) -> RiskZone {
        RiskZone::new(
            id,
            format!("{id} Quake XL"),
            "EQ",
            "US-CA",
            latitude,
            longitude,
            radius_km,
            50_000_000,
        )
        .expect("valid zone")
    }

    #[test]
    fn event_at_zone_center_is_exposed_at_zero_distance() {
        let event = event_at(36.7783, -119.4179);
        let zones = vec![
            zone("T001", 36.7783, -119.4179, 400.0),
            zone("T002", 35.6762, 139.6503, 500.0),
        ];

        let alerts = find_exposed_zones(&event, &zones);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].zone.id, "T001");
        assert_eq!(alerts[0].distance_km, 0.0);
    }

    #[test]
    fn event_outside_every_zone_yields_no_alerts() {
        let event = event_at(0.0, 0.0);
        let zones = vec![zone("T001", 36.7783, -119.4179, 400.0)];
        assert!(find_exposed_zones(&event, &zones).is_empty());
    }

    #[test]
    fn empty_zone_collection_yields_no_alerts() {
        assert!(find_exposed_zones(&event_at(36.0, -119.0), &[]).is_empty());
    }

    #[test]
    fn radius_equal_to_distance_is_exposed() {
        let event = event_at(36.0, -119.0);
        let exact = distance_km(36.0, -119.0, 37.0, -120.0);
        let zones = vec![zone("EDGE", 37.0, -120.0, exact)];

        let alerts = find_exposed_zones(&event, &zones);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].distance_km, round_distance(exact));
    }

    #[test]
    fn inclusion_uses_unrounded_distance() {
        let event = event_at(36.0, -119.0);
        let raw = distance_km(36.0, -119.0, 37.0, -120.0);
        let radius = (raw * 100.0).floor() / 100.0;
        assert!(radius < raw, "fixture must fall just inside the rounding window");

        let zones = vec![zone("EDGE", 37.0, -120.0, radius)];
        assert!(find_exposed_zones(&event, &zones).is_empty());
    }

    #[test]
    fn alerts_are_sorted_closest_first() {
        let event = event_at(36.0, -119.0);
        let far = zone("A", 40.5, -119.0, 600.0);
        let near = zone("B", 36.09, -119.0, 600.0);

        let alerts = find_exposed_zones(&event, &[far, near]);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].zone.id, "B");
        assert_eq!(alerts[1].zone.id, "A");
        assert!(alerts[0].distance_km < 11.0);
        assert!(alerts[1].distance_km > 490.0 && alerts[1].distance_km < 510.0);
    }

    #[test]
    fn equal_distances_keep_input_order() {
        let event = event_at(10.0, 10.0);
        let zones = vec![
            zone("first", 10.0, 10.0, 5.0),
            zone("second", 10.0, 10.0, 5.0),
            zone("third", 10.0, 10.0, 5.0),
        ];

        let ids = find_exposed_zones(&event, &zones)
            .into_iter()
            .map(|alert| alert.zone.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn stored_distance_has_two_decimals() {
        assert_eq!(round_distance(12.344_9), 12.34);
        assert_eq!(round_distance(12.346), 12.35);
        assert_eq!(round_distance(0.125), 0.12);
    }
}
