//! In-memory session registry
//!
//! Mutations for a given session must be serialized relative to each other
//! because transcript ordering reflects real turn order. The registry gives
//! that discipline a home: `update` holds the write lock for the duration of
//! one session mutation, so two writers to the same session never interleave,
//! while writers to different sessions only contend on the map itself.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::session::CallSession;

/// Registry of live call sessions keyed by session id
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, CallSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a session, returning its id
    pub fn insert(&self, session: CallSession) -> String {
        let id = session.id.clone();
        self.sessions.write().insert(id.clone(), session);
        id
    }

    /// Get a snapshot of a session
    pub fn get(&self, id: &str) -> Option<CallSession> {
        self.sessions.read().get(id).cloned()
    }

    /// Apply a pure session operation under the write lock.
    ///
    /// The closure receives the current session by value and returns the
    /// updated session; on error the stored session is left untouched.
    pub fn update<F>(&self, id: &str, f: F) -> Result<CallSession>
    where
        F: FnOnce(CallSession) -> Result<CallSession>,
    {
        let mut sessions = self.sessions.write();
        let current = sessions
            .get(id)
            .cloned()
            .ok_or_else(|| Error::SessionNotFound(id.to_string()))?;
        let updated = f(current)?;
        sessions.insert(id.to_string(), updated.clone());
        Ok(updated)
    }

    /// Remove a session, returning it if present
    pub fn remove(&self, id: &str) -> Option<CallSession> {
        self.sessions.write().remove(id)
    }

    /// Ids of all registered sessions
    pub fn ids(&self) -> Vec<String> {
        self.sessions.read().keys().cloned().collect()
    }

    /// Number of registered sessions
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
