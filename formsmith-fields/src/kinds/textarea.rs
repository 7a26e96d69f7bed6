//! Multi-line text input.

use crate::error::Result;
use crate::properties::Check;
use crate::registry::FieldKindDescriptor;
use crate::types::{Attributes, Capabilities, FieldKind};

use super::validate_required_non_empty;

pub static DESCRIPTOR: FieldKindDescriptor = FieldKindDescriptor::new(
    FieldKind::TextArea,
    "TextArea field",
    Capabilities::ALL,
    defaults,
    validate_required_non_empty,
    check,
);

fn defaults() -> Attributes {
    Attributes::new()
        .with("label", "Text area")
        .with("helperText", "Helper text")
        .with("required", false)
        .with("placeholder", "Value here...")
        .with("rows", 3)
}

fn check(attrs: &Attributes) -> Result<()> {
    Check::new(FieldKind::TextArea, attrs)
        .text("label", 2, 50)?
        .text("helperText", 0, 200)?
        .flag("required")?
        .text("placeholder", 0, 50)?
        .integer("rows", 1, 10)?;
    Ok(())
}
