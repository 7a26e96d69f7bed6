//! Single checkbox. A required checkbox must be ticked.

use crate::error::Result;
use crate::properties::Check;
use crate::registry::FieldKindDescriptor;
use crate::types::{Attributes, Capabilities, FieldInstance, FieldKind};

pub static DESCRIPTOR: FieldKindDescriptor = FieldKindDescriptor::new(
    FieldKind::Checkbox,
    "CheckBox field",
    Capabilities::ALL,
    defaults,
    validate,
    check,
);

/// Submitted value of a ticked checkbox.
pub const CHECKED: &str = "true";

fn defaults() -> Attributes {
    Attributes::new()
        .with("label", "Checkbox field")
        .with("helperText", "Helper text")
        .with("required", false)
}

fn validate(instance: &FieldInstance, raw: &str) -> bool {
    !instance.attributes.required() || raw == CHECKED
}

fn check(attrs: &Attributes) -> Result<()> {
    Check::new(FieldKind::Checkbox, attrs)
        .text("label", 2, 50)?
        .text("helperText", 0, 200)?
        .flag("required")?;
    Ok(())
}

pub fn encode(checked: bool) -> String {
    checked.to_string()
}

pub fn decode(value: &str) -> bool {
    value == CHECKED
}
