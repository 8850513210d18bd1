//! Prescription domain module.
//!
//! Decides whether a prescription is likely to be issued from a session's
//! answers. Everything here is pure: no ports, no I/O, safe to call from any
//! number of tasks at once.
//!
//! # Rule chain
//!
//! 1. `completeness` - the allergy, medication and symptoms questions are answered
//! 2. `allergy` - the allergy question is answered "no"
//! 3. `medication` - the medication question is answered "no"
//!
//! The first failing rule is the only reason reported.

mod engine;
mod result;
mod rules;

pub use engine::PrescriptionRuleEngine;
pub use result::PrescriptionResult;
pub use rules::{
    AnswerMap, CompletenessRule, PrescriptionRule, YesNoRule, ALLERGY_INVALID_REASON,
    ALLERGY_REASON, INCOMPLETE_REASON, MEDICATION_INVALID_REASON, MEDICATION_REASON,
};
