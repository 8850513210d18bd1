//! Consultation domain module.
//!
//! Holds the questionnaire vocabulary: the question catalog, the answers a
//! patient submits and the session that accumulates them.

mod answer;
mod errors;
mod question;
mod session;

pub use answer::{Answer, YesNo};
pub use errors::ConsultationError;
pub use question::{
    Question, QuestionCatalog, QuestionType, ALLERGY_QUESTION, MEDICATION_QUESTION,
    SYMPTOMS_QUESTION,
};
pub use session::ConsultationSession;
