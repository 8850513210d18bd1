//! Outcome of a prescription evaluation.

use serde::{Deserialize, Serialize};

/// Decision produced by the rule engine.
///
/// Only two shapes exist: approved with no reasons, or declined with exactly
/// the one reason of the first failing rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionResult {
    likely_to_prescribe: bool,
    reasons: Vec<String>,
}

impl PrescriptionResult {
    pub fn approved() -> Self {
        Self {
            likely_to_prescribe: true,
            reasons: Vec::new(),
        }
    }

    pub fn declined(reason: impl Into<String>) -> Self {
        Self {
            likely_to_prescribe: false,
            reasons: vec![reason.into()],
        }
    }

    pub fn likely_to_prescribe(&self) -> bool {
        self.likely_to_prescribe
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn into_reasons(self) -> Vec<String> {
        self.reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approved_has_no_reasons() {
        let result = PrescriptionResult::approved();
        assert!(result.likely_to_prescribe());
        assert!(result.reasons().is_empty());
    }

    #[test]
    fn declined_has_exactly_one_reason() {
        let result = PrescriptionResult::declined("not safe");
        assert!(!result.likely_to_prescribe());
        assert_eq!(result.reasons(), ["not safe".to_string()]);
        assert_eq!(result.into_reasons(), vec!["not safe".to_string()]);
    }
}
