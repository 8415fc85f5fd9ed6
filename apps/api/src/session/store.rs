use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::session::Session;

/// Shared handle to one session. The mutex is held for a whole event so a
/// session's events never interleave, remote calls included.
pub type SessionHandle = Arc<Mutex<Session>>;

/// In-memory, per-process session store. Nothing survives a restart.
///
/// A session untouched for longer than `ttl` counts as abandoned. It is
/// dropped on the next `create`, or on a `get` for that id.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Creates a session with defaulted fields and returns its handle.
    /// Idle sessions are evicted under the same write lock.
    pub async fn create(&self) -> SessionHandle {
        let session = Session::new();
        let id = session.id;
        let handle = Arc::new(Mutex::new(session));
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, existing| !is_expired(existing, self.ttl));
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {evicted} idle session(s)");
        }

        sessions.insert(id, handle.clone());
        info!("Session {id} created ({} live)", sessions.len());
        handle
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        let handle = self.sessions.read().await.get(&id).cloned()?;
        if !is_expired(&handle, self.ttl) {
            return Some(handle);
        }

        // Re-check under the write lock: it may have been touched or removed
        // since the read.
        let mut sessions = self.sessions.write().await;
        match sessions.get(&id) {
            Some(current) if !is_expired(current, self.ttl) => Some(current.clone()),
            Some(_) => {
                sessions.remove(&id);
                info!("Session {id} expired");
                None
            }
            None => None,
        }
    }

    /// Drops a session. Returns false if it did not exist.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Session {id} removed");
        }
        removed
    }
}

/// A session locked by an in-flight request is in use, never expired.
fn is_expired(handle: &SessionHandle, ttl: Duration) -> bool {
    handle
        .try_lock()
        .map(|session| session.is_idle(ttl))
        .unwrap_or(false)
}
