//! Session repository port.
//!
//! Defines the contract for persisting and retrieving consultation sessions.
//! Implementations only need atomic single-key reads and writes; callers that
//! read, modify and save must serialize those steps themselves.

use crate::domain::consultation::ConsultationSession;
use crate::domain::foundation::{DomainError, SessionId};
use async_trait::async_trait;

/// Repository port for ConsultationSession persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert or replace the snapshot stored under the session's id.
    ///
    /// Returns the stored session.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, session: ConsultationSession) -> Result<ConsultationSession, DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ConsultationSession>, DomainError>;
}
