//! SubmitAnswersHandler - Command handler for recording answers.

use std::sync::Arc;

use tracing::info;

use crate::domain::consultation::{Answer, ConsultationError, ConsultationSession};
use crate::domain::foundation::SessionId;
use crate::ports::SessionRepository;

use super::SessionLocks;

/// Command to append answers to a session.
#[derive(Debug, Clone)]
pub struct SubmitAnswersCommand {
    pub session_id: SessionId,
    pub answers: Vec<Answer>,
}

/// Handler for answer submission.
///
/// Creates the session on first submission, then appends in the given order
/// and saves. Answers are not checked against the catalog.
pub struct SubmitAnswersHandler {
    repository: Arc<dyn SessionRepository>,
    locks: Arc<SessionLocks>,
}

impl SubmitAnswersHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, locks: Arc<SessionLocks>) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(&self, cmd: SubmitAnswersCommand) -> Result<(), ConsultationError> {
        let _guard = self.locks.acquire(&cmd.session_id).await;

        // 1. Load or start the session
        let existing = self.repository.find_by_id(&cmd.session_id).await?;
        let created = existing.is_none();
        let mut session =
            existing.unwrap_or_else(|| ConsultationSession::new(cmd.session_id.clone()));

        // 2. Append
        let submitted = cmd.answers.len();
        session.add_answers(cmd.answers);

        // 3. Persist
        let session = self.repository.save(session).await?;

        info!(
            session_id = %session.session_id(),
            submitted,
            total = session.answer_count(),
            created,
            "Answers recorded"
        );

        Ok(())
    }
}
