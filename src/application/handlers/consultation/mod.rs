//! Consultation command and query handlers.

mod get_decision;
mod list_questions;
mod session_locks;
mod submit_answers;

pub use get_decision::{GetDecisionHandler, GetDecisionQuery};
pub use list_questions::ListQuestionsHandler;
pub use session_locks::SessionLocks;
pub use submit_answers::{SubmitAnswersCommand, SubmitAnswersHandler};
