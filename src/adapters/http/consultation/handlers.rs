//! HTTP handlers for consultation endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::ConsultationService;
use crate::domain::consultation::{Answer, ConsultationError};
use crate::domain::foundation::SessionId;

use super::dto::{AnswerRequest, DecisionResponse, ErrorResponse, QuestionResponse, SessionQuery};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ConsultationAppState {
    service: ConsultationService,
}

impl ConsultationAppState {
    pub fn new(service: ConsultationService) -> Self {
        Self { service }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/consultation/questions - List the consultation questions
pub async fn list_questions(State(state): State<ConsultationAppState>) -> Response {
    let questions: Vec<QuestionResponse> = state
        .service
        .list_questions()
        .into_iter()
        .map(Into::into)
        .collect();

    (StatusCode::OK, Json(questions)).into_response()
}

/// POST /api/consultation/answers?sessionId= - Record answers for a session
pub async fn submit_answers(
    State(state): State<ConsultationAppState>,
    Query(query): Query<SessionQuery>,
    Json(req): Json<Vec<AnswerRequest>>,
) -> Response {
    let session_id = match SessionId::new(query.session_id) {
        Ok(id) => id,
        Err(e) => return handle_consultation_error(e.into()),
    };

    let answers: Vec<Answer> = req.into_iter().map(Into::into).collect();

    match state.service.submit_answers(session_id, answers).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => handle_consultation_error(e),
    }
}

/// GET /api/consultation/decision?sessionId= - Get the prescription decision
pub async fn get_decision(
    State(state): State<ConsultationAppState>,
    Query(query): Query<SessionQuery>,
) -> Response {
    let session_id = match SessionId::new(query.session_id) {
        Ok(id) => id,
        Err(e) => return handle_consultation_error(e.into()),
    };

    match state.service.get_decision(session_id).await {
        Ok(result) => {
            let response: DecisionResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_consultation_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

// Unknown sessions are reported as 400, not 404.
fn handle_consultation_error(error: ConsultationError) -> Response {
    let code = error.code();
    match error {
        ConsultationError::NotFound(id) => {
            tracing::warn!(session_id = %id, "Decision requested for unknown session");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::not_found("Session", id.as_str())),
            )
                .into_response()
        }
        ConsultationError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        ConsultationError::Infrastructure(msg) => {
            tracing::error!(%code, "Internal error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(msg)),
            )
                .into_response()
        }
    }
}
