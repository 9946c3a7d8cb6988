//! USSD sessions and their in-memory registry

mod store;

pub use store::{SessionLease, SessionStore};

use crate::state_machine::MenuState;
use chrono::{DateTime, Utc};

/// One multi-turn conversation, keyed by the gateway's session id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
    /// Raw inputs in arrival order, one per processed request
    history: Vec<String>,
    state: MenuState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            history: Vec::new(),
            state: MenuState::Entry,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Most recent hop, if any request has been processed
    pub fn latest_input(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    #[allow(dead_code)] // Diagnostics
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[allow(dead_code)] // Diagnostics
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Append one hop to the history
    pub fn record_hop(&mut self, input: impl Into<String>) {
        self.history.push(input.into());
        self.updated_at = Utc::now();
    }

    pub fn set_state(&mut self, state: MenuState) {
        self.state = state;
        self.updated_at = Utc::now();
    }
}
