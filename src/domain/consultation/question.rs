//! Consultation questions and the catalog that orders them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, ValidationError};

/// "Do you have any known allergies?"
pub const ALLERGY_QUESTION: &str = "q1";
/// "Are you currently taking any medication?"
pub const MEDICATION_QUESTION: &str = "q2";
/// "Describe your symptoms briefly."
pub const SYMPTOMS_QUESTION: &str = "q3";

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "yesno")]
    YesNo,
    #[serde(rename = "text")]
    FreeText,
}

impl QuestionType {
    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::YesNo => "yesno",
            QuestionType::FreeText => "text",
        }
    }
}

/// A single consultation question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            question_type,
        }
    }
}

/// Ordered, read-only list of questions presented to the patient.
///
/// Handed to the orchestrator at construction so tests and deployments can
/// swap it without touching the use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Builds a catalog, rejecting an empty list, empty ids and duplicate ids.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if question.id.as_str().is_empty() {
                return Err(ValidationError::empty_field("question_id"));
            }
            if !seen.insert(question.id.as_str()) {
                return Err(ValidationError::duplicate("question_id", question.id.as_str()));
            }
        }

        Ok(Self { questions })
    }

    /// The standard three-question consultation.
    pub fn standard() -> Self {
        Self {
            questions: vec![
                Question::new(
                    ALLERGY_QUESTION,
                    "Do you have any known allergies?",
                    QuestionType::YesNo,
                ),
                Question::new(
                    MEDICATION_QUESTION,
                    "Are you currently taking any medication?",
                    QuestionType::YesNo,
                ),
                Question::new(
                    SYMPTOMS_QUESTION,
                    "Describe your symptoms briefly.",
                    QuestionType::FreeText,
                ),
            ],
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id.as_str() == id)
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
