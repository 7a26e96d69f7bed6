//! Horizontal rule. No attributes and no properties panel.

use crate::error::Result;
use crate::registry::FieldKindDescriptor;
use crate::types::{Attributes, Capabilities, FieldKind};

use super::always_valid;

pub static DESCRIPTOR: FieldKindDescriptor = FieldKindDescriptor::new(
    FieldKind::Separator,
    "Separator field",
    Capabilities {
        designer: true,
        fill: true,
        properties: false,
    },
    Attributes::new,
    always_valid,
    check,
);

fn check(_attrs: &Attributes) -> Result<()> {
    Ok(())
}
