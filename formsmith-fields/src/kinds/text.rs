//! Single-line text input.

use crate::error::Result;
use crate::properties::Check;
use crate::registry::FieldKindDescriptor;
use crate::types::{Attributes, Capabilities, FieldKind};

use super::validate_required_non_empty;

pub static DESCRIPTOR: FieldKindDescriptor = FieldKindDescriptor::new(
    FieldKind::Text,
    "Text field",
    Capabilities::ALL,
    defaults,
    validate_required_non_empty,
    check,
);

fn defaults() -> Attributes {
    Attributes::new()
        .with("label", "Text field")
        .with("helperText", "Helper text")
        .with("required", false)
        .with("placeholder", "Value here...")
}

fn check(attrs: &Attributes) -> Result<()> {
    Check::new(FieldKind::Text, attrs)
        .text("label", 2, 50)?
        .text("helperText", 0, 200)?
        .flag("required")?
        .text("placeholder", 0, 50)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_placeholder_is_rejected() {
        let attrs = defaults().with("placeholder", "x".repeat(51));
        assert!(check(&attrs).is_err());
    }

    #[test]
    fn empty_helper_text_is_fine() {
        let attrs = defaults().with("helperText", "");
        assert!(check(&attrs).is_ok());
    }
}
