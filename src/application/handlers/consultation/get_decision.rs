//! GetDecisionHandler - Query handler for prescription decisions.

use std::sync::Arc;

use tracing::info;

use crate::domain::consultation::ConsultationError;
use crate::domain::foundation::SessionId;
use crate::domain::prescription::{PrescriptionResult, PrescriptionRuleEngine};
use crate::ports::SessionRepository;

/// Query for the decision on a session.
#[derive(Debug, Clone)]
pub struct GetDecisionQuery {
    pub session_id: SessionId,
}

/// Handler that runs the rule engine over a session's full answer list.
pub struct GetDecisionHandler {
    repository: Arc<dyn SessionRepository>,
    engine: Arc<PrescriptionRuleEngine>,
}

impl GetDecisionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, engine: Arc<PrescriptionRuleEngine>) -> Self {
        Self { repository, engine }
    }

    pub async fn handle(&self, query: GetDecisionQuery) -> Result<PrescriptionResult, ConsultationError> {
        let session = self
            .repository
            .find_by_id(&query.session_id)
            .await?
            .ok_or_else(|| ConsultationError::not_found(query.session_id.clone()))?;

        let result = self.engine.evaluate(session.answers());

        info!(
            session_id = %query.session_id,
            likely_to_prescribe = result.likely_to_prescribe(),
            "Prescription decision computed"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::consultation::{Answer, ConsultationSession};
    use crate::domain::foundation::DomainError;
    use crate::domain::prescription::{ALLERGY_INVALID_REASON, ALLERGY_REASON, MEDICATION_REASON};
    use async_trait::async_trait;

    enum MockSessionRepository {
        Found(ConsultationSession),
        Empty,
        Broken,
    }

    #[async_trait]
    impl SessionRepository for MockSessionRepository {
        async fn save(
            &self,
            session: ConsultationSession,
        ) -> Result<ConsultationSession, DomainError> {
            Ok(session)
        }

        async fn find_by_id(
            &self,
            _id: &SessionId,
        ) -> Result<Option<ConsultationSession>, DomainError> {
            match self {
                MockSessionRepository::Found(session) => Ok(Some(session.clone())),
                MockSessionRepository::Empty => Ok(None),
                MockSessionRepository::Broken => Err(DomainError::storage("unavailable")),
            }
        }
    }

    fn session_with(pairs: &[(&str, &str)]) -> ConsultationSession {
        let mut session = ConsultationSession::new(SessionId::new("s1").unwrap());
        for (q, v) in pairs {
            session.add_answer(Answer::new(*q, *v));
        }
        session
    }

    async fn decide(repo: MockSessionRepository, id: &str) -> Result<PrescriptionResult, ConsultationError> {
        let handler = GetDecisionHandler::new(
            Arc::new(repo),
            Arc::new(PrescriptionRuleEngine::standard()),
        );
        handler
            .handle(GetDecisionQuery {
                session_id: SessionId::new(id).unwrap(),
            })
            .await
    }

    #[tokio::test]
    async fn approves_when_no_risks() {
        let repo = MockSessionRepository::Found(session_with(&[
            ("q1", "no"),
            ("q2", "no"),
            ("q3", "headache"),
        ]));
        let result = decide(repo, "s1").await.unwrap();

        assert!(result.likely_to_prescribe());
        assert!(result.reasons().is_empty());
    }

    #[tokio::test]
    async fn declines_when_has_allergies() {
        let repo = MockSessionRepository::Found(session_with(&[
            ("q1", "yes"),
            ("q2", "no"),
            ("q3", "headache"),
        ]));
        let result = decide(repo, "s1").await.unwrap();
        assert_eq!(result, PrescriptionResult::declined(ALLERGY_REASON));
    }

    #[tokio::test]
    async fn declines_when_takes_medication() {
        let repo = MockSessionRepository::Found(session_with(&[
            ("q1", "no"),
            ("q2", "yes"),
            ("q3", "headache"),
        ]));
        let result = decide(repo, "s1").await.unwrap();
        assert_eq!(result, PrescriptionResult::declined(MEDICATION_REASON));
    }

    #[tokio::test]
    async fn declines_when_allergy_answer_is_invalid() {
        let repo = MockSessionRepository::Found(session_with(&[
            ("q1", "maybe"),
            ("q2", "no"),
            ("q3", "headache"),
        ]));
        let result = decide(repo, "s1").await.unwrap();
        assert_eq!(result, PrescriptionResult::declined(ALLERGY_INVALID_REASON));
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let result = decide(MockSessionRepository::Empty, "unknown").await;

        match result {
            Err(err @ ConsultationError::NotFound(_)) => {
                assert_eq!(err.to_string(), "Session not found: unknown");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn repository_failure_is_infrastructure_error() {
        let result = decide(MockSessionRepository::Broken, "s1").await;
        assert!(matches!(result, Err(ConsultationError::Infrastructure(_))));
    }
}
