//! Drop-down select over a designer-defined list of string options.

use crate::error::Result;
use crate::properties::Check;
use crate::registry::FieldKindDescriptor;
use crate::types::{Attributes, Capabilities, FieldInstance, FieldKind};

use super::validate_required_non_empty;

pub static DESCRIPTOR: FieldKindDescriptor = FieldKindDescriptor::new(
    FieldKind::Select,
    "Select field",
    Capabilities::ALL,
    defaults,
    validate_required_non_empty,
    check,
);

fn defaults() -> Attributes {
    Attributes::new()
        .with("label", "Select field")
        .with("helperText", "Helper text")
        .with("required", false)
        .with("placeholder", "Value here...")
        .with("options", Vec::<String>::new())
}

fn check(attrs: &Attributes) -> Result<()> {
    Check::new(FieldKind::Select, attrs)
        .text("label", 2, 50)?
        .text("helperText", 0, 200)?
        .flag("required")?
        .text("placeholder", 0, 50)?
        .string_list("options")?;
    Ok(())
}

/// The options offered by a select instance, in designer order.
pub fn options(instance: &FieldInstance) -> Vec<&str> {
    instance.attributes.get_str_list("options")
}
