//! USSD gateway wire format
//!
//! Inbound callbacks arrive as form fields (`sessionId`, `phoneNumber`,
//! `serviceCode`, `text`). Replies are plain text framed with a `CON ` marker
//! when the gateway should keep the session open, or `END ` when it should
//! close it.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Body of the generic failure reply
pub const FAILURE_MESSAGE: &str = "Failed to process request";

/// Whether a reply keeps the gateway session open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Continue,
    End,
}

impl ReplyKind {
    pub fn marker(self) -> &'static str {
        match self {
            ReplyKind::Continue => "CON ",
            ReplyKind::End => "END ",
        }
    }
}

/// A rendered reply, framed on output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: ReplyKind,
    pub body: String,
}

impl Reply {
    pub fn continue_with(body: impl Into<String>) -> Self {
        Self {
            kind: ReplyKind::Continue,
            body: body.into(),
        }
    }

    pub fn end(body: impl Into<String>) -> Self {
        Self {
            kind: ReplyKind::End,
            body: body.into(),
        }
    }

    /// Terminating reply used for every request- or oracle-level failure
    pub fn failure() -> Self {
        Self::end(FAILURE_MESSAGE)
    }

    pub fn is_end(&self) -> bool {
        self.kind == ReplyKind::End
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.marker(), self.body)
    }
}

/// Form fields exactly as the gateway sends them
#[derive(Debug, Default, Deserialize)]
pub struct RawUssdRequest {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "serviceCode")]
    pub service_code: Option<String>,
    pub text: Option<String>,
}

/// A validated inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UssdRequest {
    pub session_id: String,
    pub phone_number: Option<String>,
    pub service_code: Option<String>,
    /// Newest hop only, never the accumulated history
    pub input: String,
}

impl UssdRequest {
    #[allow(dead_code)] // Used by tests
    pub fn new(session_id: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            phone_number: None,
            service_code: None,
            input: input.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Request has no sessionId")]
    MissingSessionId,
    #[error("Malformed request: {0}")]
    Malformed(String),
}

impl TryFrom<RawUssdRequest> for UssdRequest {
    type Error = RequestError;

    fn try_from(raw: RawUssdRequest) -> Result<Self, Self::Error> {
        let session_id = raw
            .session_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(RequestError::MissingSessionId)?;

        let input = latest_hop(raw.text.as_deref().unwrap_or_default()).to_string();

        Ok(Self {
            session_id,
            phone_number: raw.phone_number,
            service_code: raw.service_code,
            input,
        })
    }
}

/// Extract the newest hop from a gateway `text` field.
///
/// Some gateways send the whole conversation joined by `*` (`1*example.com`);
/// others send only the latest input. Both yield the segment after the last `*`.
pub fn latest_hop(text: &str) -> &str {
    text.rsplit('*').next().unwrap_or(text)
}
