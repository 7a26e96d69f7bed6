//! Error types for forms and the form store

use formsmith_fields::FieldsError;
use thiserror::Error;

/// Result type for forms operations
pub type Result<T> = std::result::Result<T, FormsError>;

/// Errors from the form store and the fill harness.
///
/// Invalid submitted values are not errors; they come back as
/// [`crate::SubmissionOutcome::Invalid`].
#[derive(Debug, Error)]
pub enum FormsError {
    /// Owner-scoped operation attempted without an authenticated user
    #[error("not authenticated")]
    Unauthenticated,

    /// No form with this id in the caller's scope
    #[error("form not found: {id}")]
    FormNotFound { id: String },

    /// No form behind this share token
    #[error("no form for share token: {token}")]
    ShareTokenNotFound { token: String },

    /// Submissions are only accepted once a form is published
    #[error("form is not published: {token}")]
    NotPublished { token: String },

    /// Input failed a shape check
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// A submit for this form is already awaiting the store
    #[error("a submission is already in progress")]
    SubmissionInFlight,

    /// The form has already been submitted from this filler
    #[error("form already submitted")]
    AlreadySubmitted,

    /// Field registry error (content codec)
    #[error(transparent)]
    Fields(#[from] FieldsError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormsError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a form not found error
    pub fn form_not_found(id: impl ToString) -> Self {
        Self::FormNotFound { id: id.to_string() }
    }

    /// Whether the same action can succeed later without changing the request:
    /// another submit finishes, or the owner publishes the form.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SubmissionInFlight | Self::NotPublished { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormsError::form_not_found(7);
        assert_eq!(err.to_string(), "form not found: 7");
    }

    #[test]
    fn test_invalid_value() {
        let err = FormsError::invalid_value("name", "too short");
        assert!(err.to_string().contains("name"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_retryable() {
        assert!(FormsError::SubmissionInFlight.is_retryable());
        assert!(FormsError::NotPublished { token: "t".into() }.is_retryable());
    }

    #[test]
    fn test_missing_targets_are_not_retryable() {
        assert!(!FormsError::Unauthenticated.is_retryable());
        assert!(!FormsError::form_not_found(7).is_retryable());
        assert!(!FormsError::ShareTokenNotFound { token: "t".into() }.is_retryable());
        assert!(!FormsError::AlreadySubmitted.is_retryable());
    }
}
