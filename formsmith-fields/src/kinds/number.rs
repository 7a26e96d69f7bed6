//! Numeric input. Values travel as their decimal string.

use crate::error::Result;
use crate::properties::Check;
use crate::registry::FieldKindDescriptor;
use crate::types::{Attributes, Capabilities, FieldKind};

use super::validate_required_non_empty;

pub static DESCRIPTOR: FieldKindDescriptor = FieldKindDescriptor::new(
    FieldKind::Number,
    "Number field",
    Capabilities::ALL,
    defaults,
    validate_required_non_empty,
    check,
);

fn defaults() -> Attributes {
    Attributes::new()
        .with("label", "Number field")
        .with("helperText", "Helper text")
        .with("required", false)
        .with("placeholder", "0")
}

fn check(attrs: &Attributes) -> Result<()> {
    Check::new(FieldKind::Number, attrs)
        .text("label", 2, 50)?
        .text("helperText", 0, 200)?
        .flag("required")?
        .text("placeholder", 0, 50)?;
    Ok(())
}

/// Canonical submitted form of a number.
pub fn encode(value: f64) -> String {
    value.to_string()
}
