//! Free paragraph of explanatory text. Layout only.

use crate::error::Result;
use crate::properties::Check;
use crate::registry::FieldKindDescriptor;
use crate::types::{Attributes, Capabilities, FieldKind};

use super::always_valid;

pub static DESCRIPTOR: FieldKindDescriptor = FieldKindDescriptor::new(
    FieldKind::Paragraph,
    "Paragraph field",
    Capabilities::ALL,
    defaults,
    always_valid,
    check,
);

fn defaults() -> Attributes {
    Attributes::new().with("text", "Text here")
}

fn check(attrs: &Attributes) -> Result<()> {
    Check::new(FieldKind::Paragraph, attrs).text("text", 2, 500)?;
    Ok(())
}
