use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::ExposureAlert;

/// Aggregate exposure across a flat list of alerts.
///
/// Alert counts are raw; monetary totals count every zone exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureSummary {
    pub total_alerts: usize,
    pub total_exposure_usd: u64,
    /// Distinct zone names in order of first appearance.
    pub affected_zone_names: Vec<String>,
    pub by_region: BTreeMap<String, u64>,
}

impl ExposureSummary {
    pub fn empty() -> Self {
        Self {
            total_alerts: 0,
            total_exposure_usd: 0,
            affected_zone_names: Vec::new(),
            by_region: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_alerts == 0
    }
}

/// Fold alerts into an [`ExposureSummary`], deduplicating zones by id.
pub fn summarize_exposure(alerts: &[ExposureAlert]) -> ExposureSummary {
    if alerts.is_empty() {
        return ExposureSummary::empty();
    }

    let mut seen_zone_ids = HashSet::with_capacity(alerts.len());
    let mut summary = ExposureSummary {
        total_alerts: alerts.len(),
        ..ExposureSummary::empty()
    };

    for alert in alerts {
        let zone = &alert.zone;
        if !seen_zone_ids.insert(zone.id.as_str()) {
            continue;
        }

        summary.total_exposure_usd = summary.total_exposure_usd.saturating_add(zone.limit_usd);
        summary.affected_zone_names.push(zone.name.clone());
        let region_total = summary.by_region.entry(zone.region.clone()).or_insert(0);
        *region_total = region_total.saturating_add(zone.limit_usd);
    }

    summary
}
