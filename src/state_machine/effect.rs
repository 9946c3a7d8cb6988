//! Effects produced by state transitions

use crate::ussd::Reply;

/// What the runtime must do after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send this reply as-is
    Reply(Reply),

    /// Query the domain oracle, then render the outcome
    LookupDomain { domain: String },
}

impl Effect {
    pub fn reply_continue(body: impl Into<String>) -> Self {
        Effect::Reply(Reply::continue_with(body))
    }

    pub fn reply_end(body: impl Into<String>) -> Self {
        Effect::Reply(Reply::end(body))
    }

    pub fn lookup_domain(domain: impl Into<String>) -> Self {
        Effect::LookupDomain {
            domain: domain.into(),
        }
    }

    #[allow(dead_code)] // State query utility
    pub fn is_lookup(&self) -> bool {
        matches!(self, Effect::LookupDomain { .. })
    }
}
