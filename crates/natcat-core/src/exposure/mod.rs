//! Exposure matching and aggregation.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`find_exposed_zones`] | Zones covering one event, closest first |
//! | [`summarize_exposure`] | Deduplicated totals over many alerts |
//! | [`evaluate_events`] | Matcher over a full event list |
//! | [`rank_by_exposure`] | Alerts ordered by zone limit |
//!
//! Everything here is a pure function over borrowed, immutable inputs.

mod evaluate;
mod matcher;
mod summary;

pub use evaluate::{affected_zone_ids, alerts_for_event, evaluate_events, rank_by_exposure};
pub use matcher::{find_exposed_zones, round_distance};
pub use summary::{summarize_exposure, ExposureSummary};
