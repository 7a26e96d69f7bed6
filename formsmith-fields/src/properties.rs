//! Shared attribute shape checks used by the per-kind properties validators.

use serde_json::Value;

use crate::error::{FieldsError, Result};
use crate::types::{Attributes, FieldKind};

/// Checks attributes of one kind, reporting the first offending key.
#[derive(Debug)]
pub(crate) struct Check<'a> {
    kind: FieldKind,
    attrs: &'a Attributes,
}

impl<'a> Check<'a> {
    pub(crate) fn new(kind: FieldKind, attrs: &'a Attributes) -> Self {
        Self { kind, attrs }
    }

    fn fail(&self, key: &str, message: impl Into<String>) -> FieldsError {
        FieldsError::invalid_property(self.kind, key, message)
    }

    /// A string whose char count lies in `min..=max`. Absent counts as empty.
    pub(crate) fn text(&self, key: &str, min: usize, max: usize) -> Result<&Self> {
        let len = match self.attrs.get(key) {
            None => 0,
            Some(Value::String(s)) => s.chars().count(),
            Some(_) => return Err(self.fail(key, "expected a string")),
        };
        if len < min {
            return Err(self.fail(key, format!("must be at least {min} characters")));
        }
        if len > max {
            return Err(self.fail(key, format!("must be at most {max} characters")));
        }
        Ok(self)
    }

    /// An optional boolean flag.
    pub(crate) fn flag(&self, key: &str) -> Result<&Self> {
        match self.attrs.get(key) {
            None | Some(Value::Bool(_)) => Ok(self),
            Some(_) => Err(self.fail(key, "expected a boolean")),
        }
    }

    /// A whole number in `min..=max`.
    pub(crate) fn integer(&self, key: &str, min: u64, max: u64) -> Result<&Self> {
        let n = self
            .attrs
            .get_u64(key)
            .ok_or_else(|| self.fail(key, "expected a whole number"))?;
        if n < min || n > max {
            return Err(self.fail(key, format!("must be between {min} and {max}")));
        }
        Ok(self)
    }

    /// An optional list of strings.
    pub(crate) fn string_list(&self, key: &str) -> Result<&Self> {
        match self.attrs.get(key) {
            None => Ok(self),
            Some(Value::Array(items)) if items.iter().all(Value::is_string) => Ok(self),
            Some(_) => Err(self.fail(key, "expected a list of strings")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_bounds() {
        let attrs = Attributes::new().with("label", "A");
        let check = Check::new(FieldKind::Text, &attrs);
        assert!(check.text("label", 2, 50).is_err());
        assert!(check.text("label", 1, 50).is_ok());
        assert!(check.text("missing", 0, 50).is_ok());
    }

    #[test]
    fn text_counts_chars_not_bytes() {
        let attrs = Attributes::new().with("label", "éé");
        let check = Check::new(FieldKind::Text, &attrs);
        assert!(check.text("label", 0, 2).is_ok());
    }

    #[test]
    fn wrong_types_are_rejected() {
        let attrs = Attributes::new()
            .with("required", "yes")
            .with("rows", "three")
            .with("options", vec![1, 2]);
        let check = Check::new(FieldKind::TextArea, &attrs);
        assert!(check.flag("required").is_err());
        assert!(check.integer("rows", 1, 10).is_err());
        assert!(check.string_list("options").is_err());
    }

    #[test]
    fn integer_range() {
        let attrs = Attributes::new().with("height", 300);
        let check = Check::new(FieldKind::Spacer, &attrs);
        let err = check.integer("height", 5, 200).unwrap_err();
        assert!(err.to_string().contains("between 5 and 200"));
    }
}
