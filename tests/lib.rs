//! Shared fixtures for natcat workspace integration tests.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use natcat_core::http_client::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// USGS-shaped feed with three events: Kanto, Fresno and the mid-Atlantic.
pub const PACIFIC_FEED: &str = r#"{
    "type": "FeatureCollection",
    "metadata": {"count": 3},
    "features": [
        {"type": "Feature", "id": "us-kanto",
         "properties": {"mag": 6.3, "place": "10 km S of Tokyo, Japan", "time": 1717200000000},
         "geometry": {"type": "Point", "coordinates": [139.8, 35.6, 30.0]}},
        {"type": "Feature", "id": "nc-fresno",
         "properties": {"mag": 5.1, "place": "Central California", "time": 1717203600000},
         "geometry": {"type": "Point", "coordinates": [-119.8, 36.7, 8.0]}},
        {"type": "Feature", "id": "us-atlantic",
         "properties": {"mag": 4.6, "place": "Central Mid-Atlantic Ridge", "time": 1717207200000},
         "geometry": {"type": "Point", "coordinates": [-30.0, 0.0, 10.0]}}
    ]
}"#;

/// Replays scripted responses and records every request it receives.
#[derive(Debug, Default)]
pub struct RecordingHttpClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("request log").clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("request log").len()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests.lock().expect("request log").push(request);
        let response = self
            .responses
            .lock()
            .expect("script")
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::non_retryable("script exhausted")));
        Box::pin(async move { response })
    }
}
