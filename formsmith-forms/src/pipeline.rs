//! Submission pipeline: validate collected values against a field list.
//!
//! Every field is checked, in form order, even after one fails, so the
//! caller can highlight all invalid fields at once. A failed check is data
//! ([`SubmissionOutcome::Invalid`]), not an error.

use formsmith_fields::{FieldId, FieldInstance, Registry};
use tracing::debug;

use crate::error::Result;
use crate::values::SubmissionValues;

/// Ids of the fields that failed validation, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidFields(Vec<FieldId>);

impl InvalidFields {
    pub fn contains(&self, id: &FieldId) -> bool {
        self.0.contains(id)
    }

    pub fn ids(&self) -> &[FieldId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for InvalidFields {
    type Item = FieldId;
    type IntoIter = std::vec::IntoIter<FieldId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Result of running the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// At least one field failed; nothing should be submitted
    Invalid(InvalidFields),
    /// Every field passed; the serialized values to hand to `submit_form`
    Ready(String),
}

impl SubmissionOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Check every field and collect the ones whose value fails its kind's predicate.
pub fn validate(fields: &[FieldInstance], values: &SubmissionValues) -> InvalidFields {
    let invalid: Vec<FieldId> = fields
        .iter()
        .filter(|field| !Registry::validate(field, values.get(&field.id)))
        .map(|field| field.id.clone())
        .collect();
    debug!(
        fields = fields.len(),
        invalid = invalid.len(),
        "validated submission"
    );
    InvalidFields(invalid)
}

/// Validate, and serialize the values when nothing failed.
pub fn prepare(fields: &[FieldInstance], values: &SubmissionValues) -> Result<SubmissionOutcome> {
    let invalid = validate(fields, values);
    if !invalid.is_empty() {
        return Ok(SubmissionOutcome::Invalid(invalid));
    }
    Ok(SubmissionOutcome::Ready(values.to_json()?))
}
