use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use crate::cache::{CacheMode, ResponseCache};
use crate::circuit_breaker::{CircuitBreaker, CircuitState};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::retry::RetryPolicy;
use crate::UtcDateTime;

use super::{parse_feature_collection, EventFeed, FeedBatch, FeedError, FeedQuery};

pub const USGS_EVENT_QUERY_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// USGS FDSN event service adapter.
#[derive(Clone)]
pub struct UsgsFeed {
    base_url: String,
    timeout_ms: u64,
    http_client: Arc<dyn HttpClient>,
    retry: RetryPolicy,
    circuit_breaker: Arc<CircuitBreaker>,
    cache: ResponseCache,
}

impl Default for UsgsFeed {
    fn default() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::default()))
    }
}

impl UsgsFeed {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: String::from(USGS_EVENT_QUERY_URL),
            timeout_ms: 10_000,
            http_client,
            retry: RetryPolicy::default(),
            circuit_breaker: Arc::new(CircuitBreaker::default()),
            cache: ResponseCache::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_circuit_breaker(mut self, circuit_breaker: Arc<CircuitBreaker>) -> Self {
        self.circuit_breaker = circuit_breaker;
        self
    }

    pub fn with_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn circuit_state(&self) -> CircuitState {
        self.circuit_breaker.state()
    }

    /// Query for the lookback window ending at `now`, largest magnitudes first.
    pub fn request_for(&self, query: &FeedQuery, now: UtcDateTime) -> HttpRequest {
        let (start, end) = query.window(now);
        HttpRequest::get(&self.base_url)
            .with_query("format", "geojson")
            .with_query("starttime", start.date_string())
            .with_query("endtime", end.date_string())
            .with_query("minmagnitude", query.min_magnitude)
            .with_query("orderby", "magnitude")
            .with_timeout_ms(self.timeout_ms)
    }

    async fn fetch_body(
        &self,
        request: &HttpRequest,
        mode: CacheMode,
    ) -> Result<(String, bool), FeedError> {
        let key = request.full_url();

        if mode == CacheMode::Use {
            if let Some(body) = self.cache.get(&key).await {
                tracing::debug!(url = %key, "serving seismic feed from cache");
                return Ok((body, true));
            }
        }

        let body = self.execute_with_retry(request).await?;
        if mode != CacheMode::Bypass {
            self.cache.put(key, body.clone()).await;
        }
        Ok((body, false))
    }

    async fn execute_with_retry(&self, request: &HttpRequest) -> Result<String, FeedError> {
        let mut attempt = 0;

        loop {
            if !self.circuit_breaker.allow_request() {
                return Err(FeedError::unavailable(
                    "usgs circuit breaker is open; skipping upstream call",
                ));
            }

            let error = match self.http_client.execute(request.clone()).await {
                Ok(response) if response.is_success() => {
                    self.circuit_breaker.record_success();
                    return Ok(response.body);
                }
                Ok(response) => {
                    self.circuit_breaker.record_failure();
                    let retryable = self.retry.should_retry_status(response.status);
                    FeedError::upstream_status(response.status, retryable)
                }
                Err(error) => {
                    self.circuit_breaker.record_failure();
                    FeedError::transport(&error)
                }
            };

            if !error.retryable() || attempt >= self.retry.max_retries {
                return Err(error);
            }

            let delay = self.retry.delay_for_attempt(attempt);
            tracing::warn!(
                attempt = attempt + 1,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "usgs request failed; retrying"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

impl EventFeed for UsgsFeed {
    fn name(&self) -> &'static str {
        "usgs"
    }

    fn fetch<'a>(
        &'a self,
        query: FeedQuery,
        mode: CacheMode,
    ) -> Pin<Box<dyn Future<Output = Result<FeedBatch, FeedError>> + Send + 'a>> {
        Box::pin(async move {
            let started = Instant::now();
            let request = self.request_for(&query, UtcDateTime::now());
            let (body, cache_hit) = self.fetch_body(&request, mode).await?;
            let parsed = parse_feature_collection(&body)?;

            tracing::info!(
                events = parsed.events.len(),
                skipped = parsed.warnings.len(),
                cache_hit,
                "fetched usgs seismic events"
            );

            Ok(FeedBatch {
                source: self.name(),
                events: parsed.events,
                cache_hit,
                latency_ms: started.elapsed().as_millis() as u64,
                warnings: parsed.warnings,
            })
        })
    }
}
