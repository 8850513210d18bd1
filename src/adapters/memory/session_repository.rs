//! In-Memory Session Repository Adapter
//!
//! Keeps consultation sessions in a process-local map. Sessions live until
//! the process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::consultation::ConsultationSession;
use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::SessionRepository;

/// In-memory storage for consultation sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, ConsultationSession>>>,
}

impl InMemorySessionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: ConsultationSession) -> Result<ConsultationSession, DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.session_id().clone(), session.clone());
        Ok(session)
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ConsultationSession>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }
}
