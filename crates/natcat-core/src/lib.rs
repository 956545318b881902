//! # NatCat Core
//!
//! Seismic exposure monitoring for catastrophe treaty books.
//!
//! ## Overview
//!
//! Given recent earthquakes and a catalog of circular risk zones, this crate
//! decides which zones are exposed to which events and rolls the result up
//! into deduplicated monetary totals.
//!
//! - **Geodesic distance** on a spherical Earth (haversine)
//! - **Exposure matching** per event, closest zone first
//! - **Exposure summary** with per-zone deduplication and regional totals
//! - **Event ingestion** from the USGS feed or a saved GeoJSON snapshot
//! - **Zone catalog** loading and validation
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`geo`] | Haversine distance |
//! | [`exposure`] | Matcher, summarizer, multi-event evaluation |
//! | [`domain`] | Events, zones, alerts, magnitude bands |
//! | [`feed`] | Event feed trait and adapters |
//! | [`zones`] | Zone catalog |
//! | [`report`] | Dashboard-ready report |
//! | [`config`] | Layered configuration |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`retry`] | Retry policy and backoff |
//! | [`circuit_breaker`] | Upstream circuit breaker |
//! | [`cache`] | Response cache |
//! | [`error`] | Core error types |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use natcat_core::{evaluate_events, summarize_exposure, EventFeed, FeedQuery, UsgsFeed, ZoneCatalog};
//! use natcat_core::cache::CacheMode;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let zones = ZoneCatalog::bundled()?;
//!     let batch = UsgsFeed::default().fetch(FeedQuery::default(), CacheMode::Use).await?;
//!
//!     let alerts = evaluate_events(&batch.events, zones.zones());
//!     let summary = summarize_exposure(&alerts);
//!     println!("exposed limit: ${}", summary.total_exposure_usd);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │  Event Feed  │     │ Zone Catalog │
//! └──────┬───────┘     └──────┬───────┘
//!        │ events             │ zones
//!        ▼                    ▼
//! ┌──────────────────────────────────┐
//! │ Exposure Matcher (per event)     │──▶ geo::distance_km
//! └──────────────┬───────────────────┘
//!                │ alerts
//!                ▼
//! ┌──────────────────────────────────┐
//! │ Exposure Summarizer / Report     │
//! └──────────────────────────────────┘
//! ```
//!
//! The matcher and summarizer are pure and never fail; every error kind in
//! this crate comes from ingestion, catalog loading or configuration.

pub mod cache;
pub mod circuit_breaker;
pub mod config;
pub mod domain;
pub mod error;
pub mod exposure;
pub mod feed;
pub mod geo;
pub mod http_client;
pub mod report;
pub mod retry;
pub mod zones;

// Domain models
pub use domain::{
    marker_radius, EventCounts, ExposureAlert, MagnitudeBand, RiskZone, SeismicEvent, UtcDateTime,
};

// Exposure engine
pub use exposure::{
    affected_zone_ids, alerts_for_event, evaluate_events, find_exposed_zones, rank_by_exposure,
    summarize_exposure, ExposureSummary,
};
pub use geo::{distance_km, GeoPoint, EARTH_RADIUS_KM};

// Ingestion
pub use feed::{EventFeed, FeedBatch, FeedError, FeedErrorKind, FeedQuery, FileFeed, UsgsFeed};
pub use zones::{ZoneCatalog, ZoneCatalogError};

// Presentation
pub use report::{AlertRow, ExposureReport};

// Configuration
pub use config::{ConfigError, FeedConfig, NatcatConfig, ZonesConfig};

// Error types
pub use error::{CoreError, ValidationError};
