//! One module per field kind. Each exposes a static descriptor the registry
//! table points at, plus any value encoding the kind's fill widget needs.

pub mod checkbox;
pub mod date;
pub mod number;
pub mod paragraph;
pub mod select;
pub mod separator;
pub mod spacer;
pub mod text;
pub mod textarea;
pub mod title;

use crate::types::FieldInstance;

/// Predicate shared by the free-text style input kinds: a required field
/// needs a non-empty value.
pub(crate) fn validate_required_non_empty(instance: &FieldInstance, raw: &str) -> bool {
    !instance.attributes.required() || !raw.is_empty()
}

/// Predicate for layout-only kinds, which carry no input.
pub(crate) fn always_valid(_instance: &FieldInstance, _raw: &str) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attributes, FieldId, FieldKind};

    #[test]
    fn required_non_empty() {
        let optional = FieldInstance::new(FieldId::from("a"), FieldKind::Text, Attributes::new());
        let required = FieldInstance::new(
            FieldId::from("b"),
            FieldKind::Text,
            Attributes::new().with("required", true),
        );
        assert!(validate_required_non_empty(&optional, ""));
        assert!(!validate_required_non_empty(&required, ""));
        assert!(validate_required_non_empty(&required, " "));
    }
}
