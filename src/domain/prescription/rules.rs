//! Individual prescription safety rules.

use std::collections::HashMap;

use crate::domain::consultation::{
    Answer, YesNo, ALLERGY_QUESTION, MEDICATION_QUESTION, SYMPTOMS_QUESTION,
};
use crate::domain::foundation::QuestionId;

pub const INCOMPLETE_REASON: &str = "Not all consultation questions have been answered.";
pub const ALLERGY_REASON: &str = "Patient reports known allergies; prescribing is not safe.";
pub const ALLERGY_INVALID_REASON: &str =
    "Answer to allergy question is invalid (must be 'yes' or 'no').";
pub const MEDICATION_REASON: &str =
    "Patient is currently taking other medication; prescribing is not safe.";
pub const MEDICATION_INVALID_REASON: &str =
    "Answer to medication question is invalid (must be 'yes' or 'no').";

/// Answers indexed by question id, last submission wins.
#[derive(Debug, Clone, Default)]
pub struct AnswerMap<'a> {
    by_question: HashMap<&'a str, &'a Answer>,
}

impl<'a> AnswerMap<'a> {
    pub fn from_answers(answers: &'a [Answer]) -> Self {
        let mut by_question = HashMap::with_capacity(answers.len());
        for answer in answers {
            by_question.insert(answer.question_id().as_str(), answer);
        }
        Self { by_question }
    }

    pub fn get(&self, question_id: &str) -> Option<&'a Answer> {
        self.by_question.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.by_question.contains_key(question_id)
    }

    /// Number of distinct questions answered.
    pub fn len(&self) -> usize {
        self.by_question.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }
}

/// A single named check over the submitted answers.
pub trait PrescriptionRule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Returns the failure reason, or `None` when the rule passes.
    fn check(&self, answers: &AnswerMap<'_>) -> Option<String>;
}

/// Requires every listed question to have an answer.
#[derive(Debug, Clone)]
pub struct CompletenessRule {
    required: Vec<QuestionId>,
}

impl CompletenessRule {
    pub fn new(required: Vec<QuestionId>) -> Self {
        Self { required }
    }

    /// The allergy, medication and symptoms questions.
    pub fn standard() -> Self {
        Self::new(vec![
            ALLERGY_QUESTION.into(),
            MEDICATION_QUESTION.into(),
            SYMPTOMS_QUESTION.into(),
        ])
    }
}

impl PrescriptionRule for CompletenessRule {
    fn name(&self) -> &'static str {
        "completeness"
    }

    fn check(&self, answers: &AnswerMap<'_>) -> Option<String> {
        let complete = answers.len() >= self.required.len()
            && self.required.iter().all(|q| answers.contains(q.as_str()));

        if complete {
            None
        } else {
            Some(INCOMPLETE_REASON.to_string())
        }
    }
}

/// Fails when a yes/no question is answered "yes" or with something that is
/// neither "yes" nor "no".
#[derive(Debug, Clone)]
pub struct YesNoRule {
    name: &'static str,
    question: QuestionId,
    yes_reason: &'static str,
    invalid_reason: &'static str,
}

impl YesNoRule {
    pub fn new(
        name: &'static str,
        question: impl Into<QuestionId>,
        yes_reason: &'static str,
        invalid_reason: &'static str,
    ) -> Self {
        Self {
            name,
            question: question.into(),
            yes_reason,
            invalid_reason,
        }
    }

    pub fn allergy() -> Self {
        Self::new(
            "allergy",
            ALLERGY_QUESTION,
            ALLERGY_REASON,
            ALLERGY_INVALID_REASON,
        )
    }

    pub fn medication() -> Self {
        Self::new(
            "medication",
            MEDICATION_QUESTION,
            MEDICATION_REASON,
            MEDICATION_INVALID_REASON,
        )
    }
}

impl PrescriptionRule for YesNoRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self, answers: &AnswerMap<'_>) -> Option<String> {
        // An unanswered question reads as invalid; only reachable when the
        // completeness rule is not installed ahead of this one.
        let reading = answers
            .get(self.question.as_str())
            .map(Answer::interpret)
            .unwrap_or(YesNo::Invalid);

        match reading {
            YesNo::No => None,
            YesNo::Yes => Some(self.yes_reason.to_string()),
            YesNo::Invalid => Some(self.invalid_reason.to_string()),
        }
    }
}
