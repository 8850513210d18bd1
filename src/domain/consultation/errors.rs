//! Consultation-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};

/// Errors surfaced by the consultation use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsultationError {
    /// No session has been recorded under this id.
    NotFound(SessionId),
    /// Caller input was rejected.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ConsultationError {
    pub fn not_found(id: SessionId) -> Self {
        ConsultationError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConsultationError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ConsultationError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ConsultationError::NotFound(_) => ErrorCode::SessionNotFound,
            ConsultationError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ConsultationError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ConsultationError::NotFound(id) => format!("Session not found: {}", id),
            ConsultationError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ConsultationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ConsultationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ConsultationError {}

impl From<DomainError> for ConsultationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ConsultationError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ConsultationError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for ConsultationError {
    fn from(err: ValidationError) -> Self {
        ConsultationError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
