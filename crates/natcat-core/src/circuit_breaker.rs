use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Feed availability as seen by the breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitBreakerConfig {
    pub failure_threshold: u32,
    pub open_timeout: Duration,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 3,
            open_timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Default)]
struct Tripwire {
    consecutive_failures: u32,
    opened_at: Option<Instant>,
    probing: bool,
}

/// Stops hammering an upstream feed after repeated failures.
///
/// Opens after `failure_threshold` consecutive failures, lets a single probe
/// through once `open_timeout` has elapsed, and closes again on success.
#[derive(Debug)]
pub struct CircuitBreaker {
    config: CircuitBreakerConfig,
    tripwire: Mutex<Tripwire>,
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new(CircuitBreakerConfig::default())
    }
}

impl CircuitBreaker {
    pub fn new(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            tripwire: Mutex::new(Tripwire::default()),
        }
    }

    pub fn allow_request(&self) -> bool {
        let mut tripwire = self.lock();
        match tripwire.opened_at {
            // Half-open: the probe already in flight must report back first.
            None => !tripwire.probing,
            Some(opened_at) if opened_at.elapsed() >= self.config.open_timeout => {
                tripwire.opened_at = None;
                tripwire.probing = true;
                true
            }
            Some(_) => false,
        }
    }

    pub fn record_success(&self) {
        *self.lock() = Tripwire::default();
    }

    pub fn record_failure(&self) {
        let mut tripwire = self.lock();
        tripwire.consecutive_failures = tripwire.consecutive_failures.saturating_add(1);

        if tripwire.probing || tripwire.consecutive_failures >= self.config.failure_threshold {
            tripwire.opened_at = Some(Instant::now());
            tripwire.probing = false;
        }
    }

    pub fn state(&self) -> CircuitState {
        let tripwire = self.lock();
        match (tripwire.opened_at, tripwire.probing) {
            (Some(_), _) => CircuitState::Open,
            (None, true) => CircuitState::HalfOpen,
            (None, false) => CircuitState::Closed,
        }
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.lock().consecutive_failures
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tripwire> {
        self.tripwire
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_after_threshold_failures() {
        let breaker = CircuitBreaker::new(CircuitBreakerConfig {
            failure_threshold: 2,
            open_timeout: Duration::from_secs(60),
        });

        breaker.record_failure();
        assert_eq!(breaker.state(), CircuitState::Closed);
        breaker.record_failure();
        assert_eq!(breaker.state(), CircuitState::Open);
        assert!(!breaker.allow_request());
    }

    #[test]
    fn probe_after_timeout_then_closes_on_success() {
        let breaker = CircuitBreaker::new(CircuitBreakerConfig {
            failure_threshold: 1,
            open_timeout: Duration::from_millis(1),
        });

        breaker.record_failure();
        assert_eq!(breaker.state(), CircuitState::Open);

        std::thread::sleep(Duration::from_millis(5));
        assert!(breaker.allow_request());
        assert_eq!(breaker.state(), CircuitState::HalfOpen);

        breaker.record_success();
        assert_eq!(breaker.state(), CircuitState::Closed);
        assert_eq!(breaker.consecutive_failures(), 0);
    }

    #[test]
    fn failed_probe_reopens_immediately() {
        let breaker = CircuitBreaker::new(CircuitBreakerConfig {
            failure_threshold: 5,
            open_timeout: Duration::from_millis(1),
        });
        for _ in 0..5 {
            breaker.record_failure();
        }

        std::thread::sleep(Duration::from_millis(5));
        assert!(breaker.allow_request());
        breaker.record_failure();
        assert_eq!(breaker.state(), CircuitState::Open);
    }

    #[test]
    fn half_open_admits_one_trial_request_until_it_reports() {
        let breaker = CircuitBreaker::new(CircuitBreakerConfig {
            failure_threshold: 1,
            open_timeout: Duration::from_millis(1),
        });
        breaker.record_failure();

        std::thread::sleep(Duration::from_millis(5));
        assert!(breaker.allow_request());
        assert!(!breaker.allow_request());
        assert!(!breaker.allow_request());
        assert_eq!(breaker.state(), CircuitState::HalfOpen);

        breaker.record_success();
        assert!(breaker.allow_request());
        assert!(breaker.allow_request());
    }
}
