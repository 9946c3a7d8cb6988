//! Mock oracles for testing

use super::{DomainOracle, WhoisError, WhoisRecord};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::Notify;

/// Mock oracle that returns queued results and records every lookup
#[allow(dead_code)]
pub struct MockOracle {
    results: Mutex<VecDeque<Result<WhoisRecord, WhoisError>>>,
    /// Returned once the queue is drained
    fallback: Mutex<Option<Result<WhoisRecord, WhoisError>>>,
    delay: Option<Duration>,
    pub lookups: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockOracle {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            fallback: Mutex::new(None),
            delay: None,
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Sleep before answering, to simulate a stalled API
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answer every lookup with this result once the queue is empty
    pub fn always(self, result: Result<WhoisRecord, WhoisError>) -> Self {
        *self.fallback.lock().unwrap() = Some(result);
        self
    }

    pub fn queue_record(&self, record: WhoisRecord) {
        self.results.lock().unwrap().push_back(Ok(record));
    }

    pub fn queue_error(&self, error: WhoisError) {
        self.results.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DomainOracle for MockOracle {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        self.lookups.lock().unwrap().push(domain.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let queued = self.results.lock().unwrap().pop_front();
        queued
            .or_else(|| self.fallback.lock().unwrap().clone())
            .unwrap_or_else(|| Err(WhoisError::network("No mock result queued")))
    }
}

/// Oracle that blocks every lookup until released
///
/// Lets tests hold a session's critical section open at a known point.
pub struct GatedOracle {
    pub started: Notify,
    release: Notify,
}

#[allow(dead_code)]
impl GatedOracle {
    pub fn new() -> Self {
        Self {
            started: Notify::new(),
            release: Notify::new(),
        }
    }

    /// Let one blocked lookup finish
    pub fn release_one(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl DomainOracle for GatedOracle {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(WhoisRecord::available(domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_oracle_queue_then_fallback() {
        let mock = MockOracle::new().always(Ok(WhoisRecord::available("fallback.com")));
        mock.queue_record(WhoisRecord::registered("example.com", "2020-01-01", vec![]));

        let first = mock.lookup("example.com").await.unwrap();
        assert!(first.registered);

        let second = mock.lookup("other.com").await.unwrap();
        assert_eq!(second.name, "fallback.com");

        assert_eq!(mock.lookup_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_oracle_empty_queue_fails() {
        let mock = MockOracle::new();
        assert!(mock.lookup("example.com").await.is_err());
    }
}
