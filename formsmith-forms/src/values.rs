//! Values collected while filling a form.

use std::collections::BTreeMap;

use formsmith_fields::FieldId;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Raw string values keyed by field id.
///
/// Sparse: fields never touched are absent and read back as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionValues(BTreeMap<String, String>);

impl SubmissionValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    pub fn set(&mut self, id: impl AsRef<str>, value: impl Into<String>) {
        self.0.insert(id.as_ref().to_string(), value.into());
    }

    pub fn get(&self, id: &FieldId) -> &str {
        self.0.get(id.as_str()).map(String::as_str).unwrap_or("")
    }

    pub fn raw(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for SubmissionValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (k, v) in iter {
            values.set(k, v);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reads_as_empty() {
        let values = SubmissionValues::new().with("a", "x");
        assert_eq!(values.get(&FieldId::from("a")), "x");
        assert_eq!(values.get(&FieldId::from("b")), "");
        assert_eq!(values.raw("b"), None);
    }

    #[test]
    fn json_is_a_flat_object() {
        let values: SubmissionValues = [("A", "hi"), ("B", "5")].into_iter().collect();
        let json = values.to_json().unwrap();
        assert_eq!(json, r#"{"A":"hi","B":"5"}"#);
        assert_eq!(SubmissionValues::from_json(&json).unwrap(), values);
    }
}
