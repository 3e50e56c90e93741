//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid question {id}: {reason}")]
    InvalidQuestion { id: String, reason: String },

    #[error("Invalid exam result {id}: {reason}")]
    InvalidResult { id: String, reason: String },

    #[error("Exam attempt {0} has no answered questions")]
    EmptyAttempt(String),

    #[error("Invalid syllabus: {0}")]
    InvalidSyllabus(String),
}

impl DomainError {
    pub(crate) fn invalid_question(id: &str, reason: impl Into<String>) -> Self {
        DomainError::InvalidQuestion {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_result(id: &str, reason: impl Into<String>) -> Self {
        DomainError::InvalidResult {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error concerns a stored exam result (as opposed to content).
    pub fn is_result_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidResult { .. } | DomainError::EmptyAttempt(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_question_display() {
        let error = DomainError::invalid_question("q-1", "needs at least two options");
        assert_eq!(
            error.to_string(),
            "Invalid question q-1: needs at least two options"
        );
    }

    #[test]
    fn test_is_result_error() {
        assert!(DomainError::invalid_result("r-1", "bad").is_result_error());
        assert!(DomainError::EmptyAttempt("r-2".to_string()).is_result_error());
        assert!(!DomainError::invalid_question("q-1", "bad").is_result_error());
        assert!(!DomainError::InvalidSyllabus("dup".to_string()).is_result_error());
    }
}
