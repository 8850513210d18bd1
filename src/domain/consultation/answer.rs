//! Submitted answers and their yes/no interpretation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

/// Interpretation of an answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    Yes,
    No,
    /// Anything other than "yes" or "no", compared case-insensitively.
    Invalid,
}

/// One answer to one question, immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    question_id: QuestionId,
    value: String,
}

impl Answer {
    pub fn new(question_id: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
        }
    }

    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Reads the value as a yes/no answer. No trimming is applied.
    pub fn interpret(&self) -> YesNo {
        if self.value.eq_ignore_ascii_case("yes") {
            YesNo::Yes
        } else if self.value.eq_ignore_ascii_case("no") {
            YesNo::No
        } else {
            YesNo::Invalid
        }
    }

    pub fn is_yes(&self) -> bool {
        self.interpret() == YesNo::Yes
    }

    pub fn is_no(&self) -> bool {
        self.interpret() == YesNo::No
    }
}
