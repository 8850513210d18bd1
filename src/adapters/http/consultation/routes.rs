//! HTTP routes for consultation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_decision, list_questions, submit_answers, ConsultationAppState};

/// Creates the consultation router.
///
/// Routes (relative to `/api/consultation`):
/// - `GET /questions` - Question catalog
/// - `POST /answers?sessionId=` - Record answers, 202 on success
/// - `GET /decision?sessionId=` - Prescription decision
pub fn consultation_routes() -> Router<ConsultationAppState> {
    Router::new()
        .route("/questions", get(list_questions))
        .route("/answers", post(submit_answers))
        .route("/decision", get(get_decision))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionRepository;
    use crate::application::ConsultationService;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let service = ConsultationService::standard(Arc::new(InMemorySessionRepository::new()));
        consultation_routes().with_state(ConsultationAppState::new(service))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn questions_returns_catalog() {
        let response = app()
            .oneshot(Request::builder().uri("/questions").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json[0]["id"], "q1");
        assert_eq!(json[1]["id"], "q2");
        assert_eq!(json[2]["id"], "q3");
        assert_eq!(json[2]["type"], "text");
    }

    #[tokio::test]
    async fn answers_are_accepted() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/answers?sessionId=s1")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"[{"questionId":"q1","value":"yes"},{"questionId":"q2","value":"no"}]"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn empty_session_id_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/answers?sessionId=")
                    .header("content-type", "application/json")
                    .body(Body::from("[]"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn decision_for_unknown_session_is_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/decision?sessionId=unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Session not found: unknown");
    }

    #[tokio::test]
    async fn decision_without_session_id_is_bad_request() {
        let response = app()
            .oneshot(Request::builder().uri("/decision").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
