use serde::Deserialize;

use crate::{SeismicEvent, UtcDateTime};

use super::FeedError;

/// Events decoded from a GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedFeed {
    pub events: Vec<SeismicEvent>,
    pub warnings: Vec<String>,
}

/// Decode a USGS-style GeoJSON `FeatureCollection`.
///
/// Missing properties fall back to the feed's documented defaults: magnitude
/// `0.0`, place `"Unknown"`, epoch time `0`, and `0.0` for any missing
/// coordinate. Features that still fail validation (for example an
/// out-of-range latitude) are dropped with a warning rather than failing the
/// whole batch.
pub fn parse_feature_collection(body: &str) -> Result<ParsedFeed, FeedError> {
    let collection: FeatureCollection = serde_json::from_str(body)
        .map_err(|e| FeedError::parse(format!("failed to parse event feed: {e}")))?;

    let mut parsed = ParsedFeed {
        events: Vec::with_capacity(collection.features.len()),
        warnings: Vec::new(),
    };

    for feature in collection.features {
        match feature.into_event() {
            Ok(event) => parsed.events.push(event),
            Err(warning) => parsed.warnings.push(warning),
        }
    }

    Ok(parsed)
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    properties: Option<FeatureProperties>,
    #[serde(default)]
    geometry: Option<FeatureGeometry>,
}

#[derive(Debug, Default, Deserialize)]
struct FeatureProperties {
    #[serde(default)]
    mag: Option<f64>,
    #[serde(default)]
    place: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    time: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct FeatureGeometry {
    /// `[longitude, latitude, depth_km]`
    #[serde(default)]
    coordinates: Vec<f64>,
}

impl Feature {
    fn into_event(self) -> Result<SeismicEvent, String> {
        let id = self.id.unwrap_or_default();
        let properties = self.properties.unwrap_or_default();
        let coordinates = self.geometry.unwrap_or_default().coordinates;
        let coordinate = |index: usize| coordinates.get(index).copied().unwrap_or(0.0);

        let time = UtcDateTime::from_unix_millis(properties.time.unwrap_or(0))
            .map_err(|e| format!("skipped feature '{id}': {e}"))?;

        SeismicEvent::new(
            id.clone(),
            properties.mag.unwrap_or(0.0),
            coordinate(1),
            coordinate(0),
            properties.place.unwrap_or_else(|| String::from("Unknown")),
            time,
            coordinate(2),
        )
        .map_err(|e| format!("skipped feature '{id}': {e}"))
    }
}
