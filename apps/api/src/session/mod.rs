//! Session store: per-user analysis, roadmap and chat context.
//!
//! Every read-modify-write goes through `checkout`, which hands back the user's
//! own `tokio::sync::Mutex` guard. Concurrent requests for one user are
//! serialized; requests for different users only share the brief map lock.
//!
//! `AppState` holds an `Arc<dyn SessionStore>`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

use crate::analysis::sector::Sector;
use crate::roadmap::Roadmap;

/// Accumulated state for one user. Lives for the process lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct SessionContext {
    pub resume_text: String,
    pub target_role: String,
    pub sector: Sector,
    pub skills_have: Vec<String>,
    pub skills_need: Vec<String>,
    pub roadmap: Roadmap,
    pub roadmap_goal: String,
    pub updated_at: DateTime<Utc>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            resume_text: String::new(),
            target_role: String::new(),
            sector: Sector::General,
            skills_have: Vec::new(),
            skills_need: Vec::new(),
            roadmap: Roadmap::default(),
            roadmap_goal: String::new(),
            updated_at: Utc::now(),
        }
    }
}

impl SessionContext {
    /// True for a session created lazily by a chat turn and never populated.
    pub fn is_blank(&self) -> bool {
        self.resume_text.is_empty()
            && self.target_role.is_empty()
            && self.skills_have.is_empty()
            && self.skills_need.is_empty()
            && self.roadmap.is_empty()
    }

    pub fn has_resume(&self) -> bool {
        !self.resume_text.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Storage seam for session contexts. Swap the backend without touching the engine.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Snapshot of a user's session, if one exists.
    async fn get(&self, user_id: &str) -> Option<SessionContext>;

    /// Replaces a user's session wholesale, waiting for any in-flight turn.
    async fn put(&self, user_id: &str, context: SessionContext);

    /// Locks a user's session for update, creating an empty one if needed.
    /// Writes through the guard are visible to the next checkout immediately.
    async fn checkout(&self, user_id: &str) -> OwnedMutexGuard<SessionContext>;

    /// Number of sessions held.
    async fn count(&self) -> usize;
}

/// Process-lifetime store. Sessions are never evicted.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<SessionContext>>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn existing(&self, user_id: &str) -> Option<Arc<Mutex<SessionContext>>> {
        self.sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(user_id)
            .cloned()
    }

    fn slot(&self, user_id: &str) -> Arc<Mutex<SessionContext>> {
        if let Some(slot) = self.existing(user_id) {
            return slot;
        }
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        sessions
            .entry(user_id.to_string())
            .or_insert_with(|| {
                debug!("Creating session for user {user_id}");
                Arc::new(Mutex::new(SessionContext::default()))
            })
            .clone()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &str) -> Option<SessionContext> {
        let slot = self.existing(user_id)?;
        let context = slot.lock().await;
        Some(context.clone())
    }

    async fn put(&self, user_id: &str, mut context: SessionContext) {
        let slot = self.slot(user_id);
        let mut guard = slot.lock().await;
        context.touch();
        *guard = context;
    }

    async fn checkout(&self, user_id: &str) -> OwnedMutexGuard<SessionContext> {
        self.slot(user_id).lock_owned().await
    }

    async fn count(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}
