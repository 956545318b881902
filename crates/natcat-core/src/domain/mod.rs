//! # Domain Models
//!
//! Canonical domain types for seismic exposure monitoring.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SeismicEvent`] | Earthquake record from the ingestion feed |
//! | [`RiskZone`] | Treaty coverage circle with a USD limit |
//! | [`ExposureAlert`] | Event/zone pairing with computed distance |
//! | [`MagnitudeBand`] | Severity tier used by presentation layers |
//! | [`EventCounts`] | Event totals per magnitude bucket |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! Constructors validate coordinate ranges and numeric fields. Fields stay
//! public: the exposure engine trusts what it is handed and never re-validates.

mod magnitude;
mod models;
mod timestamp;

pub use magnitude::{marker_radius, EventCounts, MagnitudeBand};
pub use models::{ExposureAlert, RiskZone, SeismicEvent};
pub use timestamp::UtcDateTime;
