//! Vertical gap of a configurable pixel height. Layout only.

use crate::error::Result;
use crate::properties::Check;
use crate::registry::FieldKindDescriptor;
use crate::types::{Attributes, Capabilities, FieldKind};

use super::always_valid;

pub static DESCRIPTOR: FieldKindDescriptor = FieldKindDescriptor::new(
    FieldKind::Spacer,
    "Spacer field",
    Capabilities::ALL,
    defaults,
    always_valid,
    check,
);

fn defaults() -> Attributes {
    // px
    Attributes::new().with("height", 20)
}

fn check(attrs: &Attributes) -> Result<()> {
    Check::new(FieldKind::Spacer, attrs).integer("height", 5, 200)?;
    Ok(())
}
