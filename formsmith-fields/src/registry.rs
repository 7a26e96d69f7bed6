//! The fixed lookup table from kind tag to its descriptor.

use tracing::trace;

use crate::error::Result;
use crate::kinds;
use crate::types::{Attributes, Capabilities, FieldId, FieldInstance, FieldKind};

/// Self-contained definition of one field kind.
///
/// Descriptors are plain data with function pointers, built once as statics.
pub struct FieldKindDescriptor {
    pub kind: FieldKind,
    /// Palette button label
    pub label: &'static str,
    pub capabilities: Capabilities,
    defaults: fn() -> Attributes,
    validate: fn(&FieldInstance, &str) -> bool,
    check: fn(&Attributes) -> Result<()>,
}

impl FieldKindDescriptor {
    pub(crate) const fn new(
        kind: FieldKind,
        label: &'static str,
        capabilities: Capabilities,
        defaults: fn() -> Attributes,
        validate: fn(&FieldInstance, &str) -> bool,
        check: fn(&Attributes) -> Result<()>,
    ) -> Self {
        Self {
            kind,
            label,
            capabilities,
            defaults,
            validate,
            check,
        }
    }

    /// A fresh copy of this kind's default attributes.
    pub fn default_attributes(&self) -> Attributes {
        (self.defaults)()
    }

    /// Build a new instance with default attributes.
    pub fn construct(&self, id: FieldId) -> FieldInstance {
        FieldInstance::new(id, self.kind, self.default_attributes())
    }

    /// Whether `raw` is an acceptable submitted value for `instance`.
    pub fn validate(&self, instance: &FieldInstance, raw: &str) -> bool {
        (self.validate)(instance, raw)
    }

    /// Check attributes coming from a properties panel.
    pub fn check_properties(&self, attributes: &Attributes) -> Result<()> {
        (self.check)(attributes)
    }
}

static DESCRIPTORS: [&FieldKindDescriptor; 11] = [
    &kinds::text::DESCRIPTOR,
    &kinds::title::TITLE,
    &kinds::title::SUBTITLE,
    &kinds::paragraph::DESCRIPTOR,
    &kinds::separator::DESCRIPTOR,
    &kinds::spacer::DESCRIPTOR,
    &kinds::number::DESCRIPTOR,
    &kinds::textarea::DESCRIPTOR,
    &kinds::date::DESCRIPTOR,
    &kinds::select::DESCRIPTOR,
    &kinds::checkbox::DESCRIPTOR,
];

/// Entry point for kind lookups. Stateless; every session shares the same table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry;

impl Registry {
    /// The descriptor for `kind`. Total over the closed tag set.
    pub fn lookup(kind: FieldKind) -> &'static FieldKindDescriptor {
        let descriptor = DESCRIPTORS[kind.index()];
        debug_assert_eq!(descriptor.kind, kind, "registry table out of order");
        descriptor
    }

    /// Construct a fresh instance of `kind` with its own copy of the defaults.
    pub fn construct(kind: FieldKind, id: FieldId) -> FieldInstance {
        trace!(kind = %kind, id = %id, "constructing field instance");
        Self::lookup(kind).construct(id)
    }

    /// Validate one submitted value against its instance's kind.
    pub fn validate(instance: &FieldInstance, raw: &str) -> bool {
        Self::lookup(instance.kind).validate(instance, raw)
    }

    /// Check designer-edited attributes against the kind's shape.
    pub fn check_properties(kind: FieldKind, attributes: &Attributes) -> Result<()> {
        Self::lookup(kind).check_properties(attributes)
    }

    /// All descriptors in palette order.
    pub fn palette() -> impl Iterator<Item = &'static FieldKindDescriptor> {
        DESCRIPTORS.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_total_and_ordered() {
        for kind in FieldKind::ALL {
            assert_eq!(Registry::lookup(kind).kind, kind);
        }
    }

    #[test]
    fn construct_uses_defaults() {
        let instance = Registry::construct(FieldKind::Text, FieldId::from("a"));
        assert_eq!(instance.id.as_str(), "a");
        assert_eq!(instance.kind, FieldKind::Text);
        assert_eq!(instance.attributes.label(), Some("Text field"));
        assert!(!instance.attributes.required());
    }

    #[test]
    fn constructed_attributes_are_independent() {
        let mut first = Registry::construct(FieldKind::Select, FieldId::from("a"));
        let second = Registry::construct(FieldKind::Select, FieldId::from("b"));
        first.attributes.set("label", "Changed");
        first.attributes.set("options", vec!["x"]);
        assert_eq!(second.attributes.label(), Some("Select field"));
        assert!(second.attributes.get_str_list("options").is_empty());
        assert_eq!(
            Registry::lookup(FieldKind::Select)
                .default_attributes()
                .label(),
            Some("Select field")
        );
    }

    #[test]
    fn defaults_pass_their_own_properties_check() {
        for descriptor in Registry::palette() {
            let defaults = descriptor.default_attributes();
            assert!(
                descriptor.check_properties(&defaults).is_ok(),
                "{} defaults should be valid",
                descriptor.kind
            );
        }
    }

    #[test]
    fn palette_lists_every_kind_once() {
        let kinds: Vec<_> = Registry::palette().map(|d| d.kind).collect();
        assert_eq!(kinds, FieldKind::ALL.to_vec());
    }

    #[test]
    fn separator_has_no_properties_panel() {
        assert!(!Registry::lookup(FieldKind::Separator).capabilities.properties);
        assert!(Registry::lookup(FieldKind::Text).capabilities.properties);
    }
}
