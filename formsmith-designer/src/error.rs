//! Error types for the designer

use formsmith_fields::FieldsError;
use thiserror::Error;

/// Result type for designer operations
pub type Result<T> = std::result::Result<T, DesignerError>;

/// Errors that can escape the designer.
///
/// Ordinary gestures never fail: every classified drop either mutates the
/// state or is a no-op. `InstanceNotFound` means a drop target or edited
/// instance is not in the session, which only happens when the host's view
/// and the session disagree.
#[derive(Debug, Error)]
pub enum DesignerError {
    /// A referenced instance id is not in the session
    #[error("field instance not found: {id}")]
    InstanceNotFound { id: String },

    /// Field registry error (properties check, content codec)
    #[error(transparent)]
    Fields(#[from] FieldsError),
}

impl DesignerError {
    pub fn instance_not_found(id: impl ToString) -> Self {
        Self::InstanceNotFound { id: id.to_string() }
    }

    /// Whether this is an internal inconsistency rather than bad input
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InstanceNotFound { .. })
    }
}
