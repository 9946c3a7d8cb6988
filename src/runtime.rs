//! Runtime for USSD sessions
//!
//! Drives one gateway request through the session store, the state machine
//! and, when the transition asks for it, the domain oracle.


use crate::session::SessionStore;
use crate::state_machine::{render_lookup, transition, Effect, MenuState, TransitionResult};
use crate::ussd::{RawUssdRequest, Reply, UssdRequest};
use crate::whois::{DomainOracle, WhoisError, WhoisRecord, DEFAULT_LOOKUP_TIMEOUT};
use std::sync::Arc;
use std::time::Duration;

/// What a processed request produced
#[allow(dead_code)] // state and hops are for callers that inspect a hop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOutcome {
    pub reply: Reply,
    /// State the transition resolved to for this hop
    pub state: MenuState,
    /// History length after this hop
    pub hops: usize,
}

/// Handles requests for every session
pub struct SessionRuntime {
    store: SessionStore,
    oracle: Arc<dyn DomainOracle>,
    lookup_timeout: Duration,
}

impl SessionRuntime {
    pub fn new(oracle: Arc<dyn DomainOracle>) -> Self {
        Self {
            store: SessionStore::new(),
            oracle,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    #[allow(dead_code)] // Used by tests
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Validate raw gateway fields, then handle the request.
    ///
    /// A malformed request gets the generic failure reply and never reaches
    /// the session store.
    pub async fn handle_raw(&self, raw: RawUssdRequest) -> Reply {
        match UssdRequest::try_from(raw) {
            Ok(request) => self.handle(&request).await.reply,
            Err(e) => {
                tracing::warn!(error = %e, "Rejecting USSD request");
                Reply::failure()
            }
        }
    }

    /// Process one hop for a session.
    ///
    /// The session stays checked out until the reply is rendered, so hops for
    /// the same session id apply one at a time, in arrival order.
    pub async fn handle(&self, request: &UssdRequest) -> HandlerOutcome {
        let mut session = self.store.get_or_create(&request.session_id).await;

        let previous = session.state();
        session.record_hop(&request.input);

        let TransitionResult { new_state, effect } = transition(previous, &request.input);
        let reply = self.execute_effect(&request.session_id, effect).await;

        // An END reply closes the conversation whatever state produced it
        let stored = if reply.is_end() {
            MenuState::Terminal
        } else {
            new_state
        };
        session.set_state(stored);
        let hops = session.history().len();

        tracing::info!(
            session_id = %request.session_id,
            phone_number = request.phone_number.as_deref().unwrap_or_default(),
            previous = %previous,
            state = %new_state,
            hops,
            end = reply.is_end(),
            "Processed USSD hop"
        );

        self.store.save(session);

        HandlerOutcome {
            reply,
            state: new_state,
            hops,
        }
    }

    async fn execute_effect(&self, session_id: &str, effect: Effect) -> Reply {
        match effect {
            Effect::Reply(reply) => reply,
            Effect::LookupDomain { domain } => {
                let outcome = self.lookup(&domain).await;
                if let Err(e) = &outcome {
                    tracing::warn!(
                        session_id = %session_id,
                        domain = %domain,
                        kind = ?e.kind,
                        error = %e,
                        "Replying with failure after domain lookup error"
                    );
                }
                render_lookup(&domain, outcome.as_ref())
            }
        }
    }

    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        match tokio::time::timeout(self.lookup_timeout, self.oracle.lookup(domain)).await {
            Ok(result) => result,
            Err(_) => Err(WhoisError::timeout(format!(
                "Lookup for {domain} exceeded {}ms",
                self.lookup_timeout.as_millis()
            ))),
        }
    }
}
