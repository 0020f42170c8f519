//! In-memory registry of live chat sessions
//!
//! Each browser gets its own [`ChatSession`], addressed by a random id.
//! Nothing here outlives the process. Sessions idle past the timeout are
//! dropped, and the live count is capped by evicting the least recently
//! used session.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::config::Edition;
use crate::conversation::Message;

use super::session::{ChatSession, Exchange};

/// Errors from session lookup
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(Uuid),
}

/// Retention bounds for live sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub idle_timeout: Duration,
    pub max_sessions: usize,
}

struct Entry {
    session: ChatSession,
    last_seen: Instant,
    /// Monotonic use counter; orders sessions for LRU eviction
    last_use: u64,
}

#[derive(Default)]
struct Sessions {
    entries: HashMap<Uuid, Entry>,
    clock: u64,
}

impl Sessions {
    fn touch(&mut self, id: Uuid) -> Result<&mut ChatSession, SessionError> {
        self.clock += 1;
        let entry = self.entries.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        entry.last_seen = Instant::now();
        entry.last_use = self.clock;
        Ok(&mut entry.session)
    }

    fn evict_idle(&mut self, idle_timeout: Duration) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.last_seen.elapsed() < idle_timeout);
        before - self.entries.len()
    }

    fn evict_least_recent(&mut self) -> Option<Uuid> {
        let id = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_use)
            .map(|(id, _)| *id)?;
        self.entries.remove(&id);
        Some(id)
    }
}

pub struct SessionRegistry {
    edition: Edition,
    system_prompt: String,
    limits: SessionLimits,
    sessions: Mutex<Sessions>,
}

impl SessionRegistry {
    pub fn new(edition: Edition, system_prompt: impl Into<String>, limits: SessionLimits) -> Self {
        Self {
            edition,
            system_prompt: system_prompt.into(),
            limits,
            sessions: Mutex::new(Sessions::default()),
        }
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn limits(&self) -> SessionLimits {
        self.limits
    }

    /// Start a new session and return its id.
    ///
    /// Idle sessions are swept first; if the registry is still full the
    /// least recently used session makes room.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let session = ChatSession::new(self.edition, self.system_prompt.clone());

        let mut sessions = self.sessions.lock().await;
        let expired = sessions.evict_idle(self.limits.idle_timeout);
        if expired > 0 {
            tracing::debug!(expired, "Expired idle sessions");
        }
        while sessions.entries.len() >= self.limits.max_sessions.max(1) {
            match sessions.evict_least_recent() {
                Some(evicted) => {
                    tracing::info!(session_id = %evicted, "Session evicted to stay under cap")
                }
                None => break,
            }
        }

        sessions.clock += 1;
        let last_use = sessions.clock;
        sessions.entries.insert(
            id,
            Entry {
                session,
                last_seen: Instant::now(),
                last_use,
            },
        );
        tracing::info!(session_id = %id, active = sessions.entries.len(), "Session created");
        id
    }

    /// Whether a session is live, without counting as a use
    pub async fn contains(&self, id: Uuid) -> bool {
        self.sessions.lock().await.entries.contains_key(&id)
    }

    /// Run one user turn against a session
    pub async fn submit(&self, id: Uuid, input: &str) -> Result<Exchange, SessionError> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.touch(id)?;

        let exchange = session.submit(input);
        tracing::debug!(
            session_id = %id,
            input_len = input.len(),
            reply_len = exchange.assistant.content.len(),
            history = session.conversation().len(),
            "Message answered"
        );
        Ok(exchange)
    }

    pub async fn clear(&self, id: Uuid) -> Result<(), SessionError> {
        let mut sessions = self.sessions.lock().await;
        sessions.touch(id)?.clear();

        tracing::debug!(session_id = %id, "Session cleared");
        Ok(())
    }

    /// Snapshot of the messages a session shows its user
    pub async fn visible(&self, id: Uuid) -> Result<Vec<Message>, SessionError> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.touch(id)?;

        Ok(session.conversation().visible_messages().cloned().collect())
    }

    /// End a session, dropping its history
    pub async fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entries
            .remove(&id)
            .ok_or(SessionError::NotFound(id))?;

        tracing::info!(session_id = %id, active = sessions.entries.len(), "Session ended");
        Ok(())
    }

    /// Drop every session idle past the timeout; returns how many went
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        let expired = sessions.evict_idle(self.limits.idle_timeout);
        if expired > 0 {
            tracing::info!(expired, active = sessions.entries.len(), "Expired idle sessions");
        }
        expired
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.entries.len()
    }
}
