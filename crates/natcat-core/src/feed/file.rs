use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::time::Instant;

use crate::cache::CacheMode;

use super::{parse_feature_collection, EventFeed, FeedBatch, FeedError, FeedQuery};

/// Replays a saved GeoJSON feed document from disk.
///
/// Only the magnitude threshold is applied: a snapshot is replayed as-is
/// regardless of how old its events are, so the lookback window is ignored.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventFeed for FileFeed {
    fn name(&self) -> &'static str {
        "file"
    }

    fn fetch<'a>(
        &'a self,
        query: FeedQuery,
        _mode: CacheMode,
    ) -> Pin<Box<dyn Future<Output = Result<FeedBatch, FeedError>> + Send + 'a>> {
        Box::pin(async move {
            let started = Instant::now();
            let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
                FeedError::io(format!(
                    "failed to read event file '{}': {e}",
                    self.path.display()
                ))
            })?;

            let parsed = parse_feature_collection(&body)?;
            let mut events = parsed
                .events
                .into_iter()
                .filter(|event| event.magnitude >= query.min_magnitude)
                .collect::<Vec<_>>();
            events.sort_by(|left, right| right.magnitude.total_cmp(&left.magnitude));

            tracing::info!(
                path = %self.path.display(),
                events = events.len(),
                "loaded seismic events from file"
            );

            Ok(FeedBatch {
                source: self.name(),
                events,
                cache_hit: false,
                latency_ms: started.elapsed().as_millis() as u64,
                warnings: parsed.warnings,
            })
        })
    }
}
