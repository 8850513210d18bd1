//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Caller-supplied identifier of a consultation session.
///
/// Opaque to the service: any non-empty string is accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a catalog question ("q1", "q2", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_accepts_opaque_string() {
        let id = SessionId::new("s1").unwrap();
        assert_eq!(id.as_str(), "s1");
        assert_eq!(id.to_string(), "s1");
    }

    #[test]
    fn session_id_rejects_empty_string() {
        let result = SessionId::new("");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "session_id"),
            other => panic!("expected EmptyField, got {:?}", other),
        }
    }

    #[test]
    fn session_id_keeps_whitespace_verbatim() {
        let id = SessionId::new(" s1 ").unwrap();
        assert_eq!(id.as_str(), " s1 ");
    }

    #[test]
    fn session_id_serializes_transparently() {
        let id = SessionId::new("abc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }

    #[test]
    fn question_id_from_str() {
        let id: QuestionId = "q3".into();
        assert_eq!(id.as_str(), "q3");
    }
}
