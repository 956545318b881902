//! In-memory TTL cache for raw feed responses.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// How a single fetch interacts with the response cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Serve a fresh cached body when present, otherwise fetch and store.
    #[default]
    Use,
    /// Always fetch, then overwrite the cached body.
    Refresh,
    /// Always fetch and leave the cache untouched.
    Bypass,
}

#[derive(Debug, Clone)]
struct CachedBody {
    body: String,
    expires_at: Instant,
}

/// Response bodies keyed by request URL. Cloning shares the underlying store.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    entries: Arc<RwLock<HashMap<String, CachedBody>>>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// A zero TTL disables storage entirely.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn is_disabled(&self) -> bool {
        self.ttl.is_zero()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| Instant::now() <= entry.expires_at)
            .map(|entry| entry.body.clone())
    }

    pub async fn put(&self, key: impl Into<String>, body: impl Into<String>) {
        if self.is_disabled() {
            return;
        }

        let entry = CachedBody {
            body: body.into(),
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.insert(key.into(), entry);
    }

    pub async fn clear_expired(&self) {
        let now = Instant::now();
        self.entries
            .write()
            .await
            .retain(|_, entry| entry.expires_at > now);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Entry count, including entries that expired but were not yet evicted.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for ResponseCache {
    /// Five minutes, matching how often the upstream feed meaningfully changes.
    fn default() -> Self {
        Self::new(Duration::from_secs(300))
    }
}
