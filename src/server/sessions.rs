//! Session registry.
//!
//! Each page load gets its own [`Session`]; sessions never share control
//! state. When the cap is reached the oldest session is dropped.

use crate::reactive::Session;
use indexmap::IndexMap;
use parking_lot::Mutex;
use uuid::Uuid;

pub struct SessionStore {
    sessions: Mutex<IndexMap<Uuid, Session>>,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Mutex::new(IndexMap::new()),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Register a session and return its id
    pub fn insert(&self, session: Session) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.lock();
        while sessions.len() >= self.max_sessions {
            if let Some((evicted, _)) = sessions.shift_remove_index(0) {
                tracing::debug!(%evicted, "Evicted oldest session");
            }
        }
        sessions.insert(id, session);
        id
    }

    /// Run `f` against the session, if it exists
    pub fn with_session<R>(&self, id: &Uuid, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let mut sessions = self.sessions.lock();
        sessions.get_mut(id).map(f)
    }

    pub fn remove(&self, id: &Uuid) -> bool {
        self.sessions.lock().shift_remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.sessions.lock().contains_key(id)
    }
}
