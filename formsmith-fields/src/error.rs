//! Error types for the field registry

use thiserror::Error;

use crate::types::FieldKind;

/// Result type for field registry operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur in field registry operations
#[derive(Debug, Error)]
pub enum FieldsError {
    /// An attribute failed the kind's properties check
    #[error("invalid property '{field}' on {kind}: {message}")]
    InvalidProperty {
        kind: FieldKind,
        field: String,
        message: String,
    },

    /// Stored content carries the same instance id twice
    #[error("duplicate field id in content: {id}")]
    DuplicateFieldId { id: String },

    /// A value could not be decoded by a field's encoding step
    #[error("invalid {kind} value '{value}'")]
    InvalidValue { kind: FieldKind, value: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FieldsError {
    /// Create an invalid property error
    pub fn invalid_property(
        kind: FieldKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidProperty {
            kind,
            field: field.into(),
            message: message.into(),
        }
    }
}
