use serde::{Deserialize, Serialize};

use crate::SeismicEvent;

/// Dashboard severity tier for an event magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeBand {
    Light,
    Moderate,
    Major,
}

impl MagnitudeBand {
    pub fn classify(magnitude: f64) -> Self {
        if magnitude >= 6.0 {
            Self::Major
        } else if magnitude >= 5.0 {
            Self::Moderate
        } else {
            Self::Light
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Major => "major",
        }
    }

    /// Hex marker color used by map renderers.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Major => "#dc2626",
            Self::Moderate => "#f59e0b",
            Self::Light => "#3b82f6",
        }
    }
}

/// Marker radius in pixels, three per magnitude unit.
pub fn marker_radius(magnitude: f64) -> u32 {
    (magnitude * 3.0).max(0.0) as u32
}

/// Event counts split into the dashboard's magnitude buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCounts {
    pub total: usize,
    pub m4_5: usize,
    pub m5_6: usize,
    pub m6_plus: usize,
}

impl EventCounts {
    /// Events below magnitude 4.0 only contribute to `total`.
    pub fn from_events(events: &[SeismicEvent]) -> Self {
        events.iter().fold(
            Self {
                total: events.len(),
                ..Self::default()
            },
            |mut counts, event| {
                let magnitude = event.magnitude;
                if magnitude >= 6.0 {
                    counts.m6_plus += 1;
                } else if magnitude >= 5.0 {
                    counts.m5_6 += 1;
                } else if magnitude >= 4.0 {
                    counts.m4_5 += 1;
                }
                counts
            },
        )
    }
}
