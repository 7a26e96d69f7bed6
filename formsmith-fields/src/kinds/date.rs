//! Date picker. The picked date is submitted as its UTC string form, e.g.
//! `Tue, 15 Nov 1994 08:12:31 GMT`, so the predicate only checks presence.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{FieldsError, Result};
use crate::properties::Check;
use crate::registry::FieldKindDescriptor;
use crate::types::{Attributes, Capabilities, FieldKind};

use super::validate_required_non_empty;

const UTC_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

pub static DESCRIPTOR: FieldKindDescriptor = FieldKindDescriptor::new(
    FieldKind::Date,
    "Date field",
    Capabilities::ALL,
    defaults,
    validate_required_non_empty,
    check,
);

fn defaults() -> Attributes {
    Attributes::new()
        .with("label", "Date field")
        .with("helperText", "Pick a date")
        .with("required", false)
}

fn check(attrs: &Attributes) -> Result<()> {
    Check::new(FieldKind::Date, attrs)
        .text("label", 2, 50)?
        .text("helperText", 0, 200)?
        .flag("required")?;
    Ok(())
}

/// Canonical submitted form of a picked date.
pub fn encode(date: DateTime<Utc>) -> String {
    date.format(UTC_FORMAT).to_string()
}

/// Parse a submitted date value back.
pub fn decode(value: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, UTC_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| FieldsError::InvalidValue {
            kind: FieldKind::Date,
            value: value.to_string(),
        })
}

/// Short `dd/mm/yyyy` form used in submission listings.
pub fn display(value: &str) -> Result<String> {
    Ok(decode(value)?.format(DISPLAY_FORMAT).to_string())
}
