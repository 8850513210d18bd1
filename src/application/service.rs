//! ConsultationService - Entry point bundling the consultation use cases.

use std::sync::Arc;

use crate::domain::consultation::{Answer, ConsultationError, Question, QuestionCatalog};
use crate::domain::foundation::SessionId;
use crate::domain::prescription::{PrescriptionResult, PrescriptionRuleEngine};
use crate::ports::SessionRepository;

use super::handlers::consultation::{
    GetDecisionHandler, GetDecisionQuery, ListQuestionsHandler, SessionLocks,
    SubmitAnswersCommand, SubmitAnswersHandler,
};

/// Orchestrates the catalog, the session repository and the rule engine.
///
/// Cheap to clone; clones share the same handlers and session locks.
#[derive(Clone)]
pub struct ConsultationService {
    list_questions: Arc<ListQuestionsHandler>,
    submit_answers: Arc<SubmitAnswersHandler>,
    get_decision: Arc<GetDecisionHandler>,
}

impl ConsultationService {
    pub fn new(
        catalog: QuestionCatalog,
        repository: Arc<dyn SessionRepository>,
        engine: PrescriptionRuleEngine,
    ) -> Self {
        let locks = Arc::new(SessionLocks::new());
        Self {
            list_questions: Arc::new(ListQuestionsHandler::new(Arc::new(catalog))),
            submit_answers: Arc::new(SubmitAnswersHandler::new(repository.clone(), locks)),
            get_decision: Arc::new(GetDecisionHandler::new(repository, Arc::new(engine))),
        }
    }

    /// Standard catalog and rule chain over the given repository.
    pub fn standard(repository: Arc<dyn SessionRepository>) -> Self {
        Self::new(
            QuestionCatalog::standard(),
            repository,
            PrescriptionRuleEngine::standard(),
        )
    }

    pub fn list_questions(&self) -> Vec<Question> {
        self.list_questions.handle()
    }

    pub async fn submit_answers(
        &self,
        session_id: SessionId,
        answers: Vec<Answer>,
    ) -> Result<(), ConsultationError> {
        self.submit_answers
            .handle(SubmitAnswersCommand {
                session_id,
                answers,
            })
            .await
    }

    pub async fn get_decision(
        &self,
        session_id: SessionId,
    ) -> Result<PrescriptionResult, ConsultationError> {
        self.get_decision
            .handle(GetDecisionQuery { session_id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionRepository;
    use crate::domain::prescription::{ALLERGY_REASON, INCOMPLETE_REASON};

    fn service() -> ConsultationService {
        ConsultationService::standard(Arc::new(InMemorySessionRepository::new()))
    }

    fn id(s: &str) -> SessionId {
        SessionId::new(s).unwrap()
    }

    #[test]
    fn lists_three_questions() {
        let ids: Vec<String> = service()
            .list_questions()
            .into_iter()
            .map(|q| q.id.to_string())
            .collect();
        assert_eq!(ids, vec!["q1", "q2", "q3"]);
    }

    #[tokio::test]
    async fn answers_across_submissions_are_combined() {
        let service = service();
        service
            .submit_answers(id("s1"), vec![Answer::new("q1", "no"), Answer::new("q2", "no")])
            .await
            .unwrap();

        let partial = service.get_decision(id("s1")).await.unwrap();
        assert_eq!(partial, PrescriptionResult::declined(INCOMPLETE_REASON));

        service
            .submit_answers(id("s1"), vec![Answer::new("q3", "headache")])
            .await
            .unwrap();

        let full = service.get_decision(id("s1")).await.unwrap();
        assert_eq!(full, PrescriptionResult::approved());
    }

    #[tokio::test]
    async fn resubmitted_answer_overrides_earlier_one() {
        let service = service();
        service
            .submit_answers(
                id("s1"),
                vec![
                    Answer::new("q1", "no"),
                    Answer::new("q2", "no"),
                    Answer::new("q3", "headache"),
                ],
            )
            .await
            .unwrap();
        service
            .submit_answers(id("s1"), vec![Answer::new("q1", "yes")])
            .await
            .unwrap();

        let result = service.get_decision(id("s1")).await.unwrap();
        assert_eq!(result, PrescriptionResult::declined(ALLERGY_REASON));
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let service = service();
        service
            .submit_answers(id("a"), vec![Answer::new("q1", "no")])
            .await
            .unwrap();

        let result = service.get_decision(id("b")).await;
        assert!(matches!(result, Err(ConsultationError::NotFound(_))));
    }

    #[tokio::test]
    async fn decision_is_repeatable() {
        let service = service();
        service
            .submit_answers(id("s1"), vec![Answer::new("q1", "maybe")])
            .await
            .unwrap();

        let first = service.get_decision(id("s1")).await.unwrap();
        let second = service.get_decision(id("s1")).await.unwrap();
        assert_eq!(first, second);
    }
}
