//! Domain errors for the intervention workflow engine.

use thiserror::Error;

/// Join validation messages into a single line for display.
fn format_errors(errors: &[String]) -> String {
    errors.join("; ")
}

/// Domain-level errors that can occur in the workflow engine.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No intervention with this id
    #[error("Intervention not found: {0}")]
    InterventionNotFound(i64),

    /// Value is not one of the seven status wire values
    #[error("Unknown intervention status: {0}")]
    UnknownStatus(String),

    /// Value does not name a submittable phase
    #[error("Unknown phase kind: {0}. Must be one of: diagnostic, planning, quality_control")]
    UnknownPhaseKind(String),

    /// The transition table does not allow this change
    #[error("Illegal status transition from {from} to {to}")]
    IllegalTransition { from: String, to: String },

    /// A phase submission failed validation
    #[error("Invalid {phase} payload: {}", format_errors(.errors))]
    InvalidPhasePayload { phase: String, errors: Vec<String> },

    /// The persistence collaborator failed
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// A document could not be decoded
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_payload_message_joins_errors() {
        let err = DomainError::InvalidPhasePayload {
            phase: "diagnostic".to_string(),
            errors: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(err.to_string(), "Invalid diagnostic payload: first; second");
    }

    #[test]
    fn test_illegal_transition_message() {
        let err = DomainError::IllegalTransition {
            from: "DONE".to_string(),
            to: "PLANNED".to_string(),
        };
        assert_eq!(err.to_string(), "Illegal status transition from DONE to PLANNED");
    }
}
