//! Form content codec.
//!
//! Content is the ordered field list serialized as JSON text: an array of
//! `{"id", "type", "extraAttributes"}` records. The persistence layer treats it
//! as opaque. Stored attributes decode exactly as written; a record with no
//! `extraAttributes` at all is rebuilt from its kind's defaults.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::registry::Registry;
use crate::types::{Attributes, FieldId, FieldInstance, FieldKind};

/// Content of a form nobody has designed yet.
pub const EMPTY: &str = "[]";

#[derive(Deserialize)]
struct StoredField {
    id: FieldId,
    #[serde(rename = "type")]
    kind: FieldKind,
    #[serde(rename = "extraAttributes")]
    attributes: Option<Attributes>,
}

/// Serialize a field list to content text.
pub fn encode(fields: &[FieldInstance]) -> Result<String> {
    Ok(serde_json::to_string(fields)?)
}

/// Decode content text into instances.
///
/// Blank content decodes to an empty list. Duplicate ids are rejected since
/// they would break selection and drop-target resolution.
pub fn decode(content: &str) -> Result<Vec<FieldInstance>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let stored: Vec<StoredField> = serde_json::from_str(content)?;
    let mut seen = HashSet::with_capacity(stored.len());
    let mut fields = Vec::with_capacity(stored.len());

    for record in stored {
        if !seen.insert(record.id.clone()) {
            return Err(FieldsError::DuplicateFieldId {
                id: record.id.to_string(),
            });
        }
        let instance = match record.attributes {
            Some(attributes) => FieldInstance::new(record.id, record.kind, attributes),
            None => Registry::construct(record.kind, record.id),
        };
        fields.push(instance);
    }

    debug!(fields = fields.len(), "decoded form content");
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_content_is_empty() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode(EMPTY).unwrap().is_empty());
    }

    #[test]
    fn decode_stored_content() {
        let content = r#"[
            {"id":"1","type":"TitleField","extraAttributes":{"title":"Survey"}},
            {"id":"2","type":"TextField","extraAttributes":{"label":"Name","helperText":"","required":true,"placeholder":""}},
            {"id":"3","type":"SeparatorField"}
        ]"#;
        let fields = decode(content).unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].attributes.get_str("title"), Some("Survey"));
        assert!(fields[1].attributes.required());
        assert_eq!(fields[2].kind, FieldKind::Separator);
    }

    #[test]
    fn stored_attributes_are_kept_as_written() {
        let fields = decode(r#"[{"id":"t","type":"TextAreaField","extraAttributes":{"label":"Bio"}}]"#)
            .unwrap();
        assert_eq!(fields[0].attributes.label(), Some("Bio"));
        assert_eq!(fields[0].attributes.get_u64("rows"), None);
        assert_eq!(fields[0].attributes.len(), 1);
    }

    #[test]
    fn absent_attributes_fall_back_to_defaults() {
        let fields = decode(r#"[{"id":"t","type":"TextAreaField"}]"#).unwrap();
        let fresh = Registry::construct(FieldKind::TextArea, FieldId::from("t"));
        assert_eq!(fields[0], fresh);
    }

    #[test]
    fn sparse_attributes_round_trip_exactly() {
        let sparse = Attributes::new()
            .with("label", "Name")
            .with("required", true)
            .with("placeholder", "");
        let fields = vec![FieldInstance::new(FieldId::from("n"), FieldKind::Text, sparse)];

        let decoded = decode(&encode(&fields).unwrap()).unwrap();

        assert_eq!(decoded, fields);
        assert!(decoded[0].attributes.get_str("helperText").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let content = r#"[{"id":"x","type":"SpacerField"},{"id":"x","type":"SeparatorField"}]"#;
        assert!(matches!(
            decode(content),
            Err(FieldsError::DuplicateFieldId { .. })
        ));
    }

    #[test]
    fn unknown_kind_is_a_decode_error() {
        assert!(matches!(
            decode(r#"[{"id":"x","type":"RatingField"}]"#),
            Err(FieldsError::Json(_))
        ));
    }
}
