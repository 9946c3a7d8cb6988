//! JSON WHOIS API client

use super::{DomainOracle, WhoisError, WhoisRecord};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.jsonwhois.io/whois/domain";

/// Upper bound for a single lookup, end to end
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the WHOIS client
#[derive(Debug, Clone)]
pub struct WhoisConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }
}

impl WhoisConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("JSONWHOIS_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            ..Self::default()
        }
    }
}

/// Wire format of the API response
#[derive(Debug, Deserialize)]
struct JsonWhoisResponse {
    result: JsonWhoisResult,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)] // Mirrors the API payload; only a subset is rendered
struct JsonWhoisResult {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    created: Option<String>,
    #[serde(default)]
    changed: Option<String>,
    #[serde(default)]
    expires: Option<String>,
    #[serde(default)]
    dnssec: Option<String>,
    #[serde(default)]
    registered: bool,
    #[serde(default)]
    nameservers: Option<Vec<String>>,
}

impl From<JsonWhoisResult> for WhoisRecord {
    fn from(result: JsonWhoisResult) -> Self {
        Self {
            name: result.name.unwrap_or_default(),
            registered: result.registered,
            changed: result.changed.unwrap_or_default(),
            name_servers: result.nameservers.unwrap_or_default(),
        }
    }
}

fn parse_response(body: &str) -> Result<WhoisRecord, WhoisError> {
    let response: JsonWhoisResponse = serde_json::from_str(body)
        .map_err(|e| WhoisError::decode(format!("Invalid WHOIS response: {e}")))?;
    Ok(response.result.into())
}

/// Oracle backed by the JSON WHOIS HTTP API
pub struct JsonWhoisClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl JsonWhoisClient {
    pub fn new(config: &WhoisConfig) -> Result<Self, WhoisError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone().unwrap_or_default(),
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl DomainOracle for JsonWhoisClient {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("key", self.api_key.as_str()), ("domain", domain)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(
            domain = %domain,
            status = %status,
            body = %body,
            "WHOIS response received"
        );

        if !status.is_success() {
            return Err(WhoisError::status(format!(
                "WHOIS API returned {status} for {domain}"
            )));
        }

        parse_response(&body)
    }
}
