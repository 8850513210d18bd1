//! HTTP adapter for consultation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnswerRequest, DecisionResponse, ErrorResponse, QuestionResponse, SessionQuery};
pub use handlers::ConsultationAppState;
pub use routes::consultation_routes;
