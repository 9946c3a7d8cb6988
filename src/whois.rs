//! Domain availability oracle
//!
//! Answers "is this domain registered, and if so with what metadata".
//! The runtime only depends on the [`DomainOracle`] trait; the production
//! implementation talks to the JSON WHOIS API.

mod client;
mod error;

#[cfg(test)]
pub mod testing;

pub use client::{JsonWhoisClient, WhoisConfig, DEFAULT_LOOKUP_TIMEOUT};
pub use error::{WhoisError, WhoisErrorKind};

use async_trait::async_trait;
use std::sync::Arc;

/// Registration data for a single domain
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WhoisRecord {
    pub name: String,
    pub registered: bool,
    pub changed: String,
    pub name_servers: Vec<String>,
}

#[allow(dead_code)] // Constructors for mocks and tests
impl WhoisRecord {
    pub fn available(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn registered(
        name: impl Into<String>,
        changed: impl Into<String>,
        name_servers: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            registered: true,
            changed: changed.into(),
            name_servers,
        }
    }

    /// Name servers joined for display, e.g. `ns1.example.com,ns2.example.com`
    pub fn name_server_list(&self) -> String {
        self.name_servers.join(",")
    }
}

/// Remote lookup of domain registration status
#[async_trait]
pub trait DomainOracle: Send + Sync {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError>;
}

#[async_trait]
impl<T: DomainOracle + ?Sized> DomainOracle for Arc<T> {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        (**self).lookup(domain).await
    }
}

/// Logging wrapper for domain oracles
pub struct LoggingOracle {
    inner: Arc<dyn DomainOracle>,
}

impl LoggingOracle {
    pub fn new(inner: Arc<dyn DomainOracle>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DomainOracle for LoggingOracle {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        let start = std::time::Instant::now();
        tracing::info!(domain = %domain, "Sending domain lookup");
        let result = self.inner.lookup(domain).await;
        let duration = start.elapsed();

        match &result {
            Ok(record) => {
                tracing::info!(
                    domain = %domain,
                    duration_ms = %duration.as_millis(),
                    registered = record.registered,
                    "Domain lookup completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    domain = %domain,
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "Domain lookup failed"
                );
            }
        }

        result
    }
}
