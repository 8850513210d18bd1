//! Prescription rule engine.

use tracing::debug;

use crate::domain::consultation::Answer;

use super::rules::{AnswerMap, CompletenessRule, PrescriptionRule, YesNoRule};
use super::PrescriptionResult;

/// Runs an ordered chain of rules and reports the first failure.
///
/// Evaluation is pure: it never touches the session and never fails. Further
/// content rules (e.g. on the symptoms text) are added by appending to the
/// chain.
pub struct PrescriptionRuleEngine {
    rules: Vec<Box<dyn PrescriptionRule>>,
}

impl PrescriptionRuleEngine {
    /// Creates an engine that applies `rules` in the given order.
    pub fn new(rules: Vec<Box<dyn PrescriptionRule>>) -> Self {
        Self { rules }
    }

    /// Completeness, then allergy, then medication.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(CompletenessRule::standard()),
            Box::new(YesNoRule::allergy()),
            Box::new(YesNoRule::medication()),
        ])
    }

    /// Names of the installed rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn evaluate(&self, answers: &[Answer]) -> PrescriptionResult {
        let map = AnswerMap::from_answers(answers);

        for rule in &self.rules {
            if let Some(reason) = rule.check(&map) {
                debug!(rule = rule.name(), %reason, "Prescription rule failed");
                return PrescriptionResult::declined(reason);
            }
        }

        PrescriptionResult::approved()
    }
}

impl Default for PrescriptionRuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for PrescriptionRuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrescriptionRuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
