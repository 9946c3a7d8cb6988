//! Concurrency-safe session registry
//!
//! Each session lives behind its own async mutex. Checking a session out
//! holds that mutex for the whole request, so the fetch → mutate → write-back
//! cycle for one id is serialized while different ids proceed independently.
//! The registry lock is only held long enough to find or insert a slot.

use super::Session;
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

/// Registry of live sessions
#[derive(Default)]
pub struct SessionStore {
    // TODO: evict sessions idle past the gateway's session timeout; entries
    // currently live until the process exits.
    sessions: RwLock<HashMap<String, Arc<Mutex<Session>>>>,
}

/// Exclusive, uncommitted access to one session
///
/// Mutations apply to a working copy. [`SessionStore::save`] publishes them;
/// dropping the lease without saving discards them.
pub struct SessionLease {
    guard: OwnedMutexGuard<Session>,
    working: Session,
}

impl SessionLease {
    fn commit(mut self) {
        *self.guard = self.working;
    }
}

impl Deref for SessionLease {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.working
    }
}

impl DerefMut for SessionLease {
    fn deref_mut(&mut self) -> &mut Session {
        &mut self.working
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check out the session for `id`, registering a fresh one if needed.
    ///
    /// Waits while another request holds the same session.
    pub async fn get_or_create(&self, id: &str) -> SessionLease {
        let slot = self.slot(id).await;
        let guard = slot.lock_owned().await;
        let working = guard.clone();
        SessionLease { guard, working }
    }

    /// Publish the lease's changes and release the session
    #[allow(clippy::unused_self)] // Store-level API; the lease carries its slot
    pub fn save(&self, lease: SessionLease) {
        lease.commit();
    }

    /// Snapshot of a session's last saved state
    pub async fn get(&self, id: &str) -> Option<Session> {
        let slot = self.sessions.read().await.get(id).cloned()?;
        let session = slot.lock().await;
        Some(session.clone())
    }

    #[allow(dead_code)] // API completeness
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    #[allow(dead_code)] // API completeness
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    async fn slot(&self, id: &str) -> Arc<Mutex<Session>> {
        if let Some(slot) = self.sessions.read().await.get(id) {
            return Arc::clone(slot);
        }

        let mut sessions = self.sessions.write().await;
        let slot = sessions.entry(id.to_string()).or_insert_with(|| {
            tracing::debug!(session_id = %id, "Registering new session");
            Arc::new(Mutex::new(Session::new(id)))
        });
        Arc::clone(slot)
    }
}
