//! Title and subtitle headings. Layout only.

use crate::error::Result;
use crate::properties::Check;
use crate::registry::FieldKindDescriptor;
use crate::types::{Attributes, Capabilities, FieldKind};

use super::always_valid;

pub static TITLE: FieldKindDescriptor = FieldKindDescriptor::new(
    FieldKind::Title,
    "Title field",
    Capabilities::ALL,
    title_defaults,
    always_valid,
    check_title,
);

pub static SUBTITLE: FieldKindDescriptor = FieldKindDescriptor::new(
    FieldKind::SubTitle,
    "SubTitle field",
    Capabilities::ALL,
    subtitle_defaults,
    always_valid,
    check_subtitle,
);

fn title_defaults() -> Attributes {
    Attributes::new().with("title", "Title field")
}

fn subtitle_defaults() -> Attributes {
    Attributes::new().with("title", "Subtitle field")
}

fn check_title(attrs: &Attributes) -> Result<()> {
    Check::new(FieldKind::Title, attrs).text("title", 2, 50)?;
    Ok(())
}

fn check_subtitle(attrs: &Attributes) -> Result<()> {
    Check::new(FieldKind::SubTitle, attrs).text("title", 2, 50)?;
    Ok(())
}
