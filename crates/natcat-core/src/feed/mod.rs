//! Seismic event ingestion.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`EventFeed`] | Async adapter contract for event sources |
//! | [`UsgsFeed`] | USGS FDSN event service (GeoJSON) |
//! | [`FileFeed`] | GeoJSON snapshot on disk, for offline runs |
//! | [`FeedQuery`] | Minimum magnitude and lookback window |
//! | [`FeedError`] | Structured ingestion failure |
//!
//! Feeds own every upstream concern (timeouts, retries, caching, coercion of
//! missing fields). Events leave this module already validated.

mod file;
mod geojson;
mod usgs;

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::cache::CacheMode;
use crate::http_client::HttpError;
use crate::{SeismicEvent, UtcDateTime, ValidationError};

pub use file::FileFeed;
pub use geojson::{parse_feature_collection, ParsedFeed};
pub use usgs::{UsgsFeed, USGS_EVENT_QUERY_URL};

pub const DEFAULT_MIN_MAGNITUDE: f64 = 4.0;
pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;
pub const MAX_LOOKBACK_DAYS: u32 = 365;

/// Filter applied to an event feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedQuery {
    pub min_magnitude: f64,
    pub lookback_days: u32,
}

impl FeedQuery {
    pub fn new(min_magnitude: f64, lookback_days: u32) -> Result<Self, ValidationError> {
        if !min_magnitude.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: "min_magnitude",
            });
        }
        if min_magnitude < 0.0 {
            return Err(ValidationError::NegativeValue {
                field: "min_magnitude",
            });
        }
        if lookback_days == 0 || lookback_days > MAX_LOOKBACK_DAYS {
            return Err(ValidationError::LookbackOutOfRange {
                value: lookback_days,
                max: MAX_LOOKBACK_DAYS,
            });
        }

        Ok(Self {
            min_magnitude,
            lookback_days,
        })
    }

    /// `(start, end)` of the lookback window ending at `now`.
    pub fn window(&self, now: UtcDateTime) -> (UtcDateTime, UtcDateTime) {
        (now.minus_days(self.lookback_days), now)
    }
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

/// Events returned by one feed fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedBatch {
    pub source: &'static str,
    pub events: Vec<SeismicEvent>,
    pub cache_hit: bool,
    pub latency_ms: u64,
    /// Human-readable notes about features that were dropped during parsing.
    pub warnings: Vec<String>,
}

/// Feed error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    InvalidQuery,
    Unavailable,
    RateLimited,
    UpstreamStatus,
    Parse,
    Io,
}

/// Structured ingestion error surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedError {
    kind: FeedErrorKind,
    message: String,
    retryable: bool,
}

impl FeedError {
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new(FeedErrorKind::InvalidQuery, message, false)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(FeedErrorKind::Unavailable, message, true)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(FeedErrorKind::RateLimited, message, true)
    }

    pub fn upstream_status(status: u16, retryable: bool) -> Self {
        if status == 429 {
            return Self::rate_limited("upstream feed returned status 429");
        }
        Self::new(
            FeedErrorKind::UpstreamStatus,
            format!("upstream feed returned status {status}"),
            retryable,
        )
    }

    pub fn transport(error: &HttpError) -> Self {
        Self::new(
            FeedErrorKind::Unavailable,
            format!("feed transport error: {}", error.message()),
            error.retryable(),
        )
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(FeedErrorKind::Parse, message, false)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(FeedErrorKind::Io, message, false)
    }

    fn new(kind: FeedErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable,
        }
    }

    pub const fn kind(&self) -> FeedErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FeedErrorKind::InvalidQuery => "feed.invalid_query",
            FeedErrorKind::Unavailable => "feed.unavailable",
            FeedErrorKind::RateLimited => "feed.rate_limited",
            FeedErrorKind::UpstreamStatus => "feed.upstream_status",
            FeedErrorKind::Parse => "feed.parse",
            FeedErrorKind::Io => "feed.io",
        }
    }
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FeedError {}

impl From<ValidationError> for FeedError {
    fn from(error: ValidationError) -> Self {
        Self::invalid_query(error.to_string())
    }
}

/// Source of recent seismic events.
///
/// Implementations must be `Send + Sync`; a single feed instance may serve
/// concurrent fetches.
pub trait EventFeed: Send + Sync {
    /// Short identifier reported in output metadata.
    fn name(&self) -> &'static str;

    /// Fetch events matching `query`, ordered by magnitude descending.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] when the upstream is unreachable, answers with a
    /// non-success status after retries, or returns an unparsable document.
    fn fetch<'a>(
        &'a self,
        query: FeedQuery,
        mode: CacheMode,
    ) -> Pin<Box<dyn Future<Output = Result<FeedBatch, FeedError>> + Send + 'a>>;
}
