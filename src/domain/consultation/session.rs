//! ConsultationSession aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionId;

use super::Answer;

/// Answers accumulated for one consultation, in submission order.
///
/// Storage is append-only: a second answer to the same question is kept
/// alongside the first. Evaluation resolves duplicates by taking the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationSession {
    session_id: SessionId,
    answers: Vec<Answer>,
}

impl ConsultationSession {
    /// Creates a session with no answers.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            answers: Vec::new(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn add_answer(&mut self, answer: Answer) {
        self.answers.push(answer);
    }

    /// Appends answers preserving their order.
    pub fn add_answers(&mut self, answers: impl IntoIterator<Item = Answer>) {
        self.answers.extend(answers);
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }
}
